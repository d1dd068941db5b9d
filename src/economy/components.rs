//! Closed resource and building kinds plus the per-kind integer ledgers.
use serde::{Deserialize, Serialize};

/// The five gatherable resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Wood,
    Stone,
    Iron,
    Gold,
    Food,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        Self::Wood,
        Self::Stone,
        Self::Iron,
        Self::Gold,
        Self::Food,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Stone => "stone",
            Self::Iron => "iron",
            Self::Gold => "gold",
            Self::Food => "food",
        }
    }
}

/// The seven constructible buildings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingKind {
    LumberYard,
    Quarry,
    GoldMine,
    IronMine,
    Farm,
    House,
    TownHall,
}

impl BuildingKind {
    pub const ALL: [BuildingKind; 7] = [
        Self::LumberYard,
        Self::Quarry,
        Self::GoldMine,
        Self::IronMine,
        Self::Farm,
        Self::House,
        Self::TownHall,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::LumberYard => "lumber_yard",
            Self::Quarry => "quarry",
            Self::GoldMine => "gold_mine",
            Self::IronMine => "iron_mine",
            Self::Farm => "farm",
            Self::House => "house",
            Self::TownHall => "town_hall",
        }
    }
}

/// Quantity of each resource the player holds. Field names double as the
/// save-file keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ResourceLedger {
    pub wood: u32,
    pub stone: u32,
    pub iron: u32,
    pub gold: u32,
    pub food: u32,
}

impl ResourceLedger {
    pub fn amount(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Wood => self.wood,
            ResourceKind::Stone => self.stone,
            ResourceKind::Iron => self.iron,
            ResourceKind::Gold => self.gold,
            ResourceKind::Food => self.food,
        }
    }

    pub fn add(&mut self, kind: ResourceKind, quantity: u32) {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_add(quantity);
    }

    fn slot_mut(&mut self, kind: ResourceKind) -> &mut u32 {
        match kind {
            ResourceKind::Wood => &mut self.wood,
            ResourceKind::Stone => &mut self.stone,
            ResourceKind::Iron => &mut self.iron,
            ResourceKind::Gold => &mut self.gold,
            ResourceKind::Food => &mut self.food,
        }
    }
}

/// Count of each building the player owns. Counts never decrease; there is
/// no demolition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct BuildingLedger {
    pub lumber_yard: u32,
    pub quarry: u32,
    pub gold_mine: u32,
    pub iron_mine: u32,
    pub farm: u32,
    pub house: u32,
    pub town_hall: u32,
}

impl BuildingLedger {
    pub fn count(&self, kind: BuildingKind) -> u32 {
        match kind {
            BuildingKind::LumberYard => self.lumber_yard,
            BuildingKind::Quarry => self.quarry,
            BuildingKind::GoldMine => self.gold_mine,
            BuildingKind::IronMine => self.iron_mine,
            BuildingKind::Farm => self.farm,
            BuildingKind::House => self.house,
            BuildingKind::TownHall => self.town_hall,
        }
    }

    pub fn increment(&mut self, kind: BuildingKind) {
        let slot = match kind {
            BuildingKind::LumberYard => &mut self.lumber_yard,
            BuildingKind::Quarry => &mut self.quarry,
            BuildingKind::GoldMine => &mut self.gold_mine,
            BuildingKind::IronMine => &mut self.iron_mine,
            BuildingKind::Farm => &mut self.farm,
            BuildingKind::House => &mut self.house,
            BuildingKind::TownHall => &mut self.town_hall,
        };
        *slot = slot.saturating_add(1);
    }
}

/// Construction cost of a single building. Kinds left out of a config entry
/// cost nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ResourceCost {
    pub wood: u32,
    pub stone: u32,
    pub iron: u32,
    pub gold: u32,
    pub food: u32,
}

impl ResourceCost {
    pub const fn new(wood: u32, stone: u32, iron: u32, gold: u32, food: u32) -> Self {
        Self {
            wood,
            stone,
            iron,
            gold,
            food,
        }
    }

    pub fn amount(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Wood => self.wood,
            ResourceKind::Stone => self.stone,
            ResourceKind::Iron => self.iron,
            ResourceKind::Gold => self.gold,
            ResourceKind::Food => self.food,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_tracks_amounts_per_kind() {
        let mut ledger = ResourceLedger::default();
        assert_eq!(ledger.amount(ResourceKind::Wood), 0);

        ledger.add(ResourceKind::Wood, 5);
        ledger.add(ResourceKind::Wood, 2);
        ledger.add(ResourceKind::Food, 1);

        assert_eq!(ledger.amount(ResourceKind::Wood), 7);
        assert_eq!(ledger.amount(ResourceKind::Food), 1);
        assert_eq!(ledger.amount(ResourceKind::Gold), 0);
    }

    #[test]
    fn building_counts_increment() {
        let mut ledger = BuildingLedger::default();
        ledger.increment(BuildingKind::House);
        ledger.increment(BuildingKind::House);
        ledger.increment(BuildingKind::TownHall);

        assert_eq!(ledger.count(BuildingKind::House), 2);
        assert_eq!(ledger.count(BuildingKind::TownHall), 1);
        assert_eq!(ledger.count(BuildingKind::Farm), 0);
    }

    #[test]
    fn kind_labels_match_save_keys() {
        assert_eq!(ResourceKind::Wood.label(), "wood");
        assert_eq!(BuildingKind::LumberYard.label(), "lumber_yard");
        assert_eq!(BuildingKind::TownHall.label(), "town_hall");
    }
}
