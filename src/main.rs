use bevy::{log::LogPlugin, prelude::*};

mod calendar;
mod core;
mod economy;
mod reset;
mod save;

use crate::{
    calendar::CalendarPlugin, core::CorePlugin, economy::EconomyPlugin, reset::ResetPlugin,
    save::SavePlugin,
};

fn main() {
    App::new()
        .add_plugins((
            MinimalPlugins,
            LogPlugin::default(),
            CorePlugin,
            EconomyPlugin,
            CalendarPlugin,
            ResetPlugin,
            SavePlugin, // After CalendarPlugin so the end-of-day autosave lands same-frame
        ))
        .run();
}
