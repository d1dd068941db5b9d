//! The action gateway: validates and applies gather and purchase intents.
use bevy::prelude::*;

use super::{
    components::{BuildingKind, ResourceCost, ResourceKind},
    data::EconomyRegistry,
    errors::ActionError,
    events::{
        ActionRejectedEvent, BuildingPurchasedEvent, GatherIntent, PlayerAction, PurchaseIntent,
        ResourceGatheredEvent,
    },
    player::PlayerLedger,
};

/// Applies one gather action: yield is 1 plus the current house count.
///
/// Atomic: the ledger and budget change together or not at all. Returns the
/// amount credited.
pub fn apply_gather(ledger: &mut PlayerLedger, kind: ResourceKind) -> Result<u32, ActionError> {
    if ledger.actions_left() == 0 {
        return Err(ActionError::InsufficientActions);
    }

    let amount = 1 + ledger.building(BuildingKind::House);
    ledger.add_resource(kind, amount);
    ledger.consume_action();
    Ok(amount)
}

/// Applies one purchase action. The budget is checked before affordability,
/// so an exhausted day reports `InsufficientActions` even for buildings the
/// player could not afford either. Returns the cost that was deducted.
pub fn apply_purchase(
    ledger: &mut PlayerLedger,
    registry: &EconomyRegistry,
    kind: BuildingKind,
) -> Result<ResourceCost, ActionError> {
    if ledger.actions_left() == 0 {
        return Err(ActionError::InsufficientActions);
    }

    let cost = registry.cost(kind);
    if !ledger.can_afford(&cost) {
        return Err(ActionError::InsufficientResources);
    }

    ledger.spend(&cost);
    ledger.add_building(kind);
    ledger.consume_action();
    Ok(cost)
}

pub fn process_gather_intents(
    mut intents: MessageReader<GatherIntent>,
    mut ledger: ResMut<PlayerLedger>,
    mut gathered: MessageWriter<ResourceGatheredEvent>,
    mut rejected: MessageWriter<ActionRejectedEvent>,
) {
    for intent in intents.read() {
        match apply_gather(&mut ledger, intent.kind) {
            Ok(amount) => {
                debug!(
                    "Gathered {} {} ({} actions left)",
                    amount,
                    intent.kind.label(),
                    ledger.actions_left()
                );
                gathered.write(ResourceGatheredEvent {
                    kind: intent.kind,
                    amount,
                    actions_left: ledger.actions_left(),
                });
            }
            Err(reason) => {
                debug!("Gather {} refused: {reason}", intent.kind.label());
                rejected.write(ActionRejectedEvent {
                    action: PlayerAction::Gather(intent.kind),
                    reason,
                });
            }
        }
    }
}

pub fn process_purchase_intents(
    mut intents: MessageReader<PurchaseIntent>,
    registry: Res<EconomyRegistry>,
    mut ledger: ResMut<PlayerLedger>,
    mut purchased: MessageWriter<BuildingPurchasedEvent>,
    mut rejected: MessageWriter<ActionRejectedEvent>,
) {
    for intent in intents.read() {
        match apply_purchase(&mut ledger, &registry, intent.kind) {
            Ok(cost) => {
                info!(
                    "Built a {} ({} actions left)",
                    intent.kind.label(),
                    ledger.actions_left()
                );
                purchased.write(BuildingPurchasedEvent {
                    kind: intent.kind,
                    cost,
                    actions_left: ledger.actions_left(),
                });
            }
            Err(reason) => {
                debug!("Purchase {} refused: {reason}", intent.kind.label());
                rejected.write(ActionRejectedEvent {
                    action: PlayerAction::Purchase(intent.kind),
                    reason,
                });
            }
        }
    }
}
