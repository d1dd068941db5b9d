//! Calendar plugin owning the date cursor and the end-of-day turn.
use bevy::prelude::*;

use crate::economy::systems::{process_gather_intents, process_purchase_intents};

use super::{
    cursor::GameDate,
    events::{DayAdvancedEvent, EndDayIntent},
    systems::process_end_day_intents,
};

pub struct CalendarPlugin;

impl Plugin for CalendarPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameDate>()
            .add_event::<EndDayIntent>()
            .add_event::<DayAdvancedEvent>()
            .add_systems(
                Update,
                process_end_day_intents
                    .after(process_gather_intents)
                    .after(process_purchase_intents),
            );
    }
}
