//! Economy plugin wiring the player state and the action gateway.
use bevy::prelude::*;

use super::{
    data::EconomyRegistry,
    events::{
        ActionRejectedEvent, BuildingPurchasedEvent, GatherIntent, PurchaseIntent,
        ResourceGatheredEvent,
    },
    player::PlayerLedger,
    systems::{process_gather_intents, process_purchase_intents},
};

pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EconomyRegistry>()
            .init_resource::<PlayerLedger>()
            .add_event::<GatherIntent>()
            .add_event::<PurchaseIntent>()
            .add_event::<ResourceGatheredEvent>()
            .add_event::<BuildingPurchasedEvent>()
            .add_event::<ActionRejectedEvent>()
            .add_systems(Update, (process_gather_intents, process_purchase_intents));
    }
}
