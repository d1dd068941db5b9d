//! Core module wiring the shared intent clock.
pub mod plugin;

pub use plugin::CorePlugin;
