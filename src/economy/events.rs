//! Intents issued by the presentation layer and the outcomes it observes.
use bevy::prelude::{Event, Message};

use super::components::{BuildingKind, ResourceCost, ResourceKind};
use super::errors::ActionError;

/// Spend one action gathering a resource by hand.
#[derive(Event, Message, Debug, Clone, Copy)]
pub struct GatherIntent {
    pub kind: ResourceKind,
}

/// Spend one action and the construction cost on a new building.
#[derive(Event, Message, Debug, Clone, Copy)]
pub struct PurchaseIntent {
    pub kind: BuildingKind,
}

/// A gather was applied; `amount` includes the house bonus.
#[derive(Event, Message, Debug, Clone, Copy)]
pub struct ResourceGatheredEvent {
    pub kind: ResourceKind,
    pub amount: u32,
    pub actions_left: u32,
}

/// A purchase was applied and its cost deducted.
#[derive(Event, Message, Debug, Clone, Copy)]
pub struct BuildingPurchasedEvent {
    pub kind: BuildingKind,
    pub cost: ResourceCost,
    pub actions_left: u32,
}

/// An intent was refused; state is untouched.
#[derive(Event, Message, Debug, Clone, Copy)]
pub struct ActionRejectedEvent {
    pub action: PlayerAction,
    pub reason: ActionError,
}

/// Which player action an outcome refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Gather(ResourceKind),
    Purchase(BuildingKind),
}
