//! Expected failure kinds for player-initiated economy actions.
use std::fmt;

/// Why a gather or purchase was refused. These are ordinary outcomes
/// returned to the caller, never panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    /// The daily action budget is spent.
    InsufficientActions,
    /// The resource ledger does not cover the construction cost.
    InsufficientResources,
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientActions => write!(f, "no actions left today"),
            Self::InsufficientResources => write!(f, "not enough resources"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_readable_messages() {
        assert_eq!(
            ActionError::InsufficientActions.to_string(),
            "no actions left today"
        );
        assert_eq!(
            ActionError::InsufficientResources.to_string(),
            "not enough resources"
        );
    }
}
