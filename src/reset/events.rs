//! Reset confirmation intents and outcomes.
use bevy::prelude::{Event, Message};

use super::machine::ResetProgress;

/// One click on the clear-save control.
#[derive(Event, Message, Debug, Clone, Copy, Default)]
pub struct ResetConfirmIntent;

/// Where the confirmation sequence now stands, for display.
#[derive(Event, Message, Debug, Clone, Copy)]
pub struct ResetProgressEvent {
    pub progress: ResetProgress,
}

/// The reset was performed: save cleared, state back to fresh defaults.
#[derive(Event, Message, Debug, Clone, Copy)]
pub struct GameResetEvent;
