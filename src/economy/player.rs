//! Player-owned state: resource ledger, building ledger, daily action budget.
use bevy::prelude::Resource;

use super::components::{BuildingKind, BuildingLedger, ResourceCost, ResourceKind, ResourceLedger};

/// Actions granted each day before town-hall bonuses.
pub const BASE_ACTIONS_PER_DAY: u32 = 3;

/// The player's complete economic state. Mutated only by the action
/// gateway, the turn controller, the reset machine, and save loading;
/// everything else reads it.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerLedger {
    resources: ResourceLedger,
    buildings: BuildingLedger,
    actions_left: u32,
}

impl Default for PlayerLedger {
    fn default() -> Self {
        let mut ledger = Self {
            resources: ResourceLedger::default(),
            buildings: BuildingLedger::default(),
            actions_left: 0,
        };
        ledger.reset_actions();
        ledger
    }
}

impl PlayerLedger {
    pub fn resource(&self, kind: ResourceKind) -> u32 {
        self.resources.amount(kind)
    }

    pub fn building(&self, kind: BuildingKind) -> u32 {
        self.buildings.count(kind)
    }

    pub fn actions_left(&self) -> u32 {
        self.actions_left
    }

    pub fn resources(&self) -> ResourceLedger {
        self.resources
    }

    pub fn buildings(&self) -> BuildingLedger {
        self.buildings
    }

    /// True when every entry of `cost` is covered by the resource ledger.
    pub fn can_afford(&self, cost: &ResourceCost) -> bool {
        ResourceKind::ALL
            .iter()
            .all(|&kind| self.resources.amount(kind) >= cost.amount(kind))
    }

    /// Deducts `cost` from the resource ledger. Callers must have checked
    /// `can_afford` within the same logical action.
    pub fn spend(&mut self, cost: &ResourceCost) {
        self.resources.wood = self.resources.wood.saturating_sub(cost.wood);
        self.resources.stone = self.resources.stone.saturating_sub(cost.stone);
        self.resources.iron = self.resources.iron.saturating_sub(cost.iron);
        self.resources.gold = self.resources.gold.saturating_sub(cost.gold);
        self.resources.food = self.resources.food.saturating_sub(cost.food);
    }

    pub fn add_resource(&mut self, kind: ResourceKind, quantity: u32) {
        self.resources.add(kind, quantity);
    }

    pub fn add_building(&mut self, kind: BuildingKind) {
        self.buildings.increment(kind);
    }

    pub fn consume_action(&mut self) {
        self.actions_left = self.actions_left.saturating_sub(1);
    }

    /// Restores the daily budget: 3 plus one per town hall. The town-hall
    /// count is read here and nowhere else, so a hall bought mid-day pays
    /// out starting the next morning.
    pub fn reset_actions(&mut self) {
        self.actions_left = BASE_ACTIONS_PER_DAY + self.buildings.count(BuildingKind::TownHall);
    }

    pub fn set_resources(&mut self, resources: ResourceLedger) {
        self.resources = resources;
    }

    pub fn set_buildings(&mut self, buildings: BuildingLedger) {
        self.buildings = buildings;
    }

    pub fn set_actions_left(&mut self, actions_left: u32) {
        self.actions_left = actions_left;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ledger_starts_with_base_actions() {
        let ledger = PlayerLedger::default();
        assert_eq!(ledger.actions_left(), BASE_ACTIONS_PER_DAY);
        assert_eq!(ledger.resource(ResourceKind::Wood), 0);
        assert_eq!(ledger.building(BuildingKind::TownHall), 0);
    }

    #[test]
    fn affordability_is_entry_wise() {
        let mut ledger = PlayerLedger::default();
        ledger.add_resource(ResourceKind::Wood, 5);
        ledger.add_resource(ResourceKind::Food, 2);

        assert!(ledger.can_afford(&ResourceCost::new(5, 0, 0, 0, 2)));
        assert!(ledger.can_afford(&ResourceCost::default()));
        assert!(!ledger.can_afford(&ResourceCost::new(5, 1, 0, 0, 2)));
        assert!(!ledger.can_afford(&ResourceCost::new(6, 0, 0, 0, 0)));
    }

    #[test]
    fn spend_deducts_each_entry() {
        let mut ledger = PlayerLedger::default();
        ledger.add_resource(ResourceKind::Wood, 5);
        ledger.add_resource(ResourceKind::Food, 2);

        ledger.spend(&ResourceCost::new(5, 0, 0, 0, 2));
        assert_eq!(ledger.resource(ResourceKind::Wood), 0);
        assert_eq!(ledger.resource(ResourceKind::Food), 0);
    }

    #[test]
    fn town_halls_raise_the_daily_budget_only_on_reset() {
        let mut ledger = PlayerLedger::default();
        ledger.add_building(BuildingKind::TownHall);
        // No retroactive grant mid-day.
        assert_eq!(ledger.actions_left(), BASE_ACTIONS_PER_DAY);

        ledger.reset_actions();
        assert_eq!(ledger.actions_left(), BASE_ACTIONS_PER_DAY + 1);
    }
}
