//! Calendar module: the date cursor and the day-advance turn controller.
pub mod cursor;
pub mod events;
pub mod plugin;
pub mod systems;

pub use cursor::{GameDate, CAMPAIGN_START};
pub use events::{DayAdvancedEvent, EndDayIntent};
pub use plugin::CalendarPlugin;
