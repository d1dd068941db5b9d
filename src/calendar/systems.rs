//! The turn controller: the only path that accrues production and restores
//! the action budget.
use bevy::prelude::*;

use crate::economy::{EconomyRegistry, PlayerLedger, ResourceLedger};
use crate::save::events::SaveGameIntent;

use super::{cursor::GameDate, events::DayAdvancedEvent, events::EndDayIntent};

/// Advances the date by one day, credits every producing building, and
/// resets the action budget. Returns the per-resource accrual.
pub fn advance_game_day(
    date: &mut GameDate,
    ledger: &mut PlayerLedger,
    registry: &EconomyRegistry,
) -> ResourceLedger {
    date.advance();

    let mut produced = ResourceLedger::default();
    for (building, resource) in registry.producers() {
        let count = ledger.building(building);
        if count > 0 {
            ledger.add_resource(resource, count);
            produced.add(resource, count);
        }
    }

    ledger.reset_actions();
    produced
}

pub fn process_end_day_intents(
    mut intents: MessageReader<EndDayIntent>,
    registry: Res<EconomyRegistry>,
    mut date: ResMut<GameDate>,
    mut ledger: ResMut<PlayerLedger>,
    mut advanced: MessageWriter<DayAdvancedEvent>,
    mut save_requests: MessageWriter<SaveGameIntent>,
) {
    for _ in intents.read() {
        let produced = advance_game_day(&mut date, &mut ledger, &registry);
        info!(
            "Day advanced to {} ({} actions restored)",
            *date,
            ledger.actions_left()
        );
        advanced.write(DayAdvancedEvent {
            date: *date,
            produced,
            actions_left: ledger.actions_left(),
        });
        // The original saved after every sleep; keep that autosave.
        save_requests.write(SaveGameIntent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::{BuildingKind, ResourceKind};

    #[test]
    fn production_matches_building_counts() {
        let registry = EconomyRegistry::fallback();
        let mut date = GameDate::default();
        let mut ledger = PlayerLedger::default();
        ledger.add_building(BuildingKind::LumberYard);
        ledger.add_building(BuildingKind::LumberYard);
        ledger.add_building(BuildingKind::LumberYard);
        ledger.add_building(BuildingKind::Farm);

        let produced = advance_game_day(&mut date, &mut ledger, &registry);

        assert_eq!(produced.amount(ResourceKind::Wood), 3);
        assert_eq!(produced.amount(ResourceKind::Food), 1);
        assert_eq!(produced.amount(ResourceKind::Stone), 0);
        assert_eq!(ledger.resource(ResourceKind::Wood), 3);
        assert_eq!(ledger.resource(ResourceKind::Food), 1);
    }

    #[test]
    fn advancing_resets_the_budget_from_town_halls() {
        let registry = EconomyRegistry::fallback();
        let mut date = GameDate::default();
        let mut ledger = PlayerLedger::default();
        ledger.add_building(BuildingKind::TownHall);
        ledger.set_actions_left(0);

        advance_game_day(&mut date, &mut ledger, &registry);

        assert_eq!(ledger.actions_left(), 4);
        assert_eq!(date, GameDate::new(2025, 11, 2).expect("valid date"));
    }

    #[test]
    fn year_rolls_over_at_new_years_eve() {
        let registry = EconomyRegistry::fallback();
        let mut date = GameDate::new(2025, 12, 31).expect("valid date");
        let mut ledger = PlayerLedger::default();

        advance_game_day(&mut date, &mut ledger, &registry);

        assert_eq!(date, GameDate::new(2026, 1, 1).expect("valid date"));
    }

    #[test]
    fn houses_do_not_produce_passively() {
        let registry = EconomyRegistry::fallback();
        let mut date = GameDate::default();
        let mut ledger = PlayerLedger::default();
        ledger.add_building(BuildingKind::House);
        ledger.add_building(BuildingKind::TownHall);

        let produced = advance_game_day(&mut date, &mut ledger, &registry);

        for kind in ResourceKind::ALL {
            assert_eq!(produced.amount(kind), 0);
        }
    }
}
