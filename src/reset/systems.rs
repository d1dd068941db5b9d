//! System applying confirm-intents and performing the reset itself.
use bevy::prelude::*;

use crate::calendar::cursor::GameDate;
use crate::core::plugin::SimulationClock;
use crate::economy::PlayerLedger;
use crate::save::{data::SaveSlot, systems::clear_slot};

use super::{
    events::{GameResetEvent, ResetConfirmIntent, ResetProgressEvent},
    machine::{ResetConfirmMachine, ResetProgress},
};

pub fn process_reset_confirm_intents(
    mut intents: MessageReader<ResetConfirmIntent>,
    clock: Res<SimulationClock>,
    slot: Res<SaveSlot>,
    mut machine: ResMut<ResetConfirmMachine>,
    mut date: ResMut<GameDate>,
    mut ledger: ResMut<PlayerLedger>,
    mut progress_writer: MessageWriter<ResetProgressEvent>,
    mut reset_writer: MessageWriter<GameResetEvent>,
) {
    for _ in intents.read() {
        let progress = machine.register_click(clock.elapsed());
        progress_writer.write(ResetProgressEvent { progress });

        match progress {
            ResetProgress::Countdown { clicks_remaining } => {
                debug!("Clear save: {clicks_remaining} clicks to go");
            }
            ResetProgress::ConfirmWarning => {
                info!("Resetting your save data. Click again to confirm.");
            }
            ResetProgress::Triggered => {
                clear_slot(&slot);
                *date = GameDate::default();
                *ledger = PlayerLedger::default();
                info!("Game state reset");
                reset_writer.write(GameResetEvent);
            }
        }
    }
}
