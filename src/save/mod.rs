//! Persistence module: the JSON save-file round trip.
pub mod data;
pub mod error;
pub mod events;
pub mod plugin;
pub mod systems;

pub use data::{SaveSlot, DEFAULT_SAVE_PATH};
pub use error::SaveError;
pub use events::{GameLoadedEvent, LoadGameIntent, SaveFailedEvent, SaveGameIntent};
pub use plugin::SavePlugin;
