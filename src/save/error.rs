//! Failure kinds for the save-file round trip.
use std::fmt;

/// Why a save-file operation did not complete. None of these abort the
/// game: `NotFound` is an expected state and the rest leave the in-memory
/// state authoritative.
#[derive(Debug)]
pub enum SaveError {
    /// No save file exists yet.
    NotFound,
    /// The file exists but is not a readable save record.
    Corrupt(serde_json::Error),
    /// The underlying file operation failed.
    Io(std::io::Error),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "no save file found"),
            Self::Corrupt(err) => write!(f, "corrupt save data: {err}"),
            Self::Io(err) => write!(f, "save file I/O failed: {err}"),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound => None,
            Self::Corrupt(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}
