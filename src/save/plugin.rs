//! Save plugin wiring persistence intents and the startup load.
use bevy::prelude::*;

use crate::calendar::systems::process_end_day_intents;

use super::{
    data::SaveSlot,
    events::{GameLoadedEvent, LoadGameIntent, SaveFailedEvent, SaveGameIntent},
    systems::{load_save_at_startup, process_load_intents, process_save_intents},
};

pub struct SavePlugin;

impl Plugin for SavePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SaveSlot>()
            .add_event::<SaveGameIntent>()
            .add_event::<LoadGameIntent>()
            .add_event::<SaveFailedEvent>()
            .add_event::<GameLoadedEvent>()
            .add_systems(Startup, load_save_at_startup)
            .add_systems(
                Update,
                (
                    // Runs after the turn controller so the end-of-day
                    // autosave lands in the same frame.
                    process_save_intents.after(process_end_day_intents),
                    process_load_intents,
                ),
            );
    }
}
