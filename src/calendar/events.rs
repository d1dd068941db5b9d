//! Turn boundary intent and its observable outcome.
use bevy::prelude::{Event, Message};

use crate::economy::ResourceLedger;

use super::cursor::GameDate;

/// End the current day: accrue production, reset the action budget.
///
/// The presentation layer decides when to send this (typically once the
/// budget hits zero); the core applies it unconditionally.
#[derive(Event, Message, Debug, Clone, Copy, Default)]
pub struct EndDayIntent;

/// The day advanced. `produced` holds the passive accrual per resource.
#[derive(Event, Message, Debug, Clone, Copy)]
pub struct DayAdvancedEvent {
    pub date: GameDate,
    pub produced: ResourceLedger,
    pub actions_left: u32,
}
