//! Economy module hosting the player ledgers, cost tables, and the action
//! gateway that validates gather/purchase intents.
pub mod components;
pub mod data;
pub mod errors;
pub mod events;
pub mod player;
pub mod plugin;
pub mod systems;

pub use components::{BuildingKind, BuildingLedger, ResourceCost, ResourceKind, ResourceLedger};
pub use data::EconomyRegistry;
pub use errors::ActionError;
pub use events::{
    ActionRejectedEvent, BuildingPurchasedEvent, GatherIntent, PurchaseIntent,
    ResourceGatheredEvent,
};
pub use player::PlayerLedger;
pub use plugin::EconomyPlugin;
