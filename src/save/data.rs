//! Save-file format, merge policy, and the file round trip.
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::calendar::cursor::GameDate;
use crate::economy::{BuildingLedger, PlayerLedger, ResourceLedger};

use super::error::SaveError;

pub const DEFAULT_SAVE_PATH: &str = "savegame.json";

/// Where the save file lives. Tests point this at a temp directory.
#[derive(Resource, Debug, Clone)]
pub struct SaveSlot {
    path: PathBuf,
}

impl SaveSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for SaveSlot {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_PATH)
    }
}

/// The record written to disk. Serialization yields exactly the documented
/// shape: `date`, then `player` with `resources`/`buildings`/`actions_left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SaveData {
    pub date: GameDate,
    pub player: SavedPlayer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SavedPlayer {
    pub resources: ResourceLedger,
    pub buildings: BuildingLedger,
    pub actions_left: u32,
}

/// Captures the current state as a full save record.
pub fn snapshot(date: GameDate, ledger: &PlayerLedger) -> SaveData {
    SaveData {
        date,
        player: SavedPlayer {
            resources: ledger.resources(),
            buildings: ledger.buildings(),
            actions_left: ledger.actions_left(),
        },
    }
}

/// The record as read back: every key optional so partially written or
/// hand-edited files still recover whatever they do carry. Unknown keys are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSave {
    #[serde(default)]
    date: Option<RawDate>,
    #[serde(default)]
    player: Option<RawPlayer>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
struct RawDate {
    year: Option<i32>,
    month: Option<u8>,
    day: Option<u8>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
struct RawPlayer {
    resources: Option<ResourceLedger>,
    buildings: Option<BuildingLedger>,
    actions_left: Option<u32>,
}

impl RawSave {
    /// Merges the record onto the current state, key by key; absent keys
    /// keep their in-memory value. Returns `false` when a stored date
    /// failed calendar validation and was ignored.
    pub fn apply(self, date: &mut GameDate, ledger: &mut PlayerLedger) -> bool {
        let mut date_ok = true;
        if let Some(raw) = self.date {
            match GameDate::new(
                raw.year.unwrap_or(date.year()),
                raw.month.unwrap_or(date.month()),
                raw.day.unwrap_or(date.day()),
            ) {
                Some(valid) => *date = valid,
                None => date_ok = false,
            }
        }

        if let Some(player) = self.player {
            if let Some(resources) = player.resources {
                ledger.set_resources(resources);
            }
            if let Some(buildings) = player.buildings {
                ledger.set_buildings(buildings);
            }
            if let Some(actions_left) = player.actions_left {
                ledger.set_actions_left(actions_left);
            }
        }

        date_ok
    }
}

/// Writes the record, fully overwriting any prior save.
pub fn write_save(path: &Path, data: &SaveData) -> Result<(), SaveError> {
    let json = serde_json::to_string_pretty(data).map_err(SaveError::Corrupt)?;
    fs::write(path, json).map_err(SaveError::Io)
}

/// Reads the record back; an absent file is `NotFound`, an unreadable one
/// is `Corrupt`.
pub fn read_save(path: &Path) -> Result<RawSave, SaveError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => return Err(SaveError::NotFound),
        Err(err) => return Err(SaveError::Io(err)),
    };
    serde_json::from_str(&data).map_err(SaveError::Corrupt)
}

/// Deletes the save file; no-op when none exists.
pub fn clear_save(path: &Path) -> Result<(), SaveError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => Err(SaveError::Io(err)),
    }
}
