//! Reset module: the multi-click confirmation guarding a full wipe.
pub mod events;
pub mod machine;
pub mod plugin;
pub mod systems;

pub use events::{GameResetEvent, ResetConfirmIntent, ResetProgressEvent};
pub use machine::{ResetConfirmMachine, ResetProgress, CONFIRM_CLICKS, CONFIRM_WINDOW};
pub use plugin::ResetPlugin;
