//! Save and load intents plus their observable outcomes.
use bevy::prelude::{Event, Message};

use crate::calendar::cursor::GameDate;

/// Write the current state to the save slot.
#[derive(Event, Message, Debug, Clone, Copy, Default)]
pub struct SaveGameIntent;

/// Re-read the save slot, merging it onto the current state.
#[derive(Event, Message, Debug, Clone, Copy, Default)]
pub struct LoadGameIntent;

/// A save could not be written; in-memory state stays authoritative.
#[derive(Event, Message, Debug, Clone)]
pub struct SaveFailedEvent {
    pub reason: String,
}

/// A save record was applied; display surfaces should refresh.
#[derive(Event, Message, Debug, Clone, Copy)]
pub struct GameLoadedEvent {
    pub date: GameDate,
}
