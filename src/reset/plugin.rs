//! Reset plugin wiring the destructive-reset confirmation machine.
use bevy::prelude::*;

use super::{
    events::{GameResetEvent, ResetConfirmIntent, ResetProgressEvent},
    machine::ResetConfirmMachine,
    systems::process_reset_confirm_intents,
};

pub struct ResetPlugin;

impl Plugin for ResetPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ResetConfirmMachine>()
            .add_event::<ResetConfirmIntent>()
            .add_event::<ResetProgressEvent>()
            .add_event::<GameResetEvent>()
            .add_systems(Update, process_reset_confirm_intents);
    }
}
