//! Multi-click confirmation state machine guarding the destructive reset.
use std::time::Duration;

use bevy::prelude::Resource;

/// Confirm-intents required to trigger the reset.
pub const CONFIRM_CLICKS: u8 = 5;

/// Longest allowed gap between two confirm-intents before progress is
/// abandoned.
pub const CONFIRM_WINDOW: Duration = Duration::from_secs(5);

/// What a confirm-intent produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetProgress {
    /// Plain countdown; this many clicks still to go.
    Countdown { clicks_remaining: u8 },
    /// One click away; the caller should show an explicit warning.
    ConfirmWarning,
    /// The full sequence completed; the reset must be performed now.
    Triggered,
}

/// Tracks confirmation progress. The clock value is handed in with each
/// click; the machine never reads time on its own.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ResetConfirmMachine {
    clicks_remaining: u8,
    last_click: Option<Duration>,
}

impl Default for ResetConfirmMachine {
    fn default() -> Self {
        Self {
            clicks_remaining: CONFIRM_CLICKS,
            last_click: None,
        }
    }
}

impl ResetConfirmMachine {
    pub fn clicks_remaining(&self) -> u8 {
        self.clicks_remaining
    }

    /// Registers one confirm-intent observed at `now`. A gap longer than
    /// [`CONFIRM_WINDOW`] since the previous click abandons earlier
    /// progress before this click is counted.
    pub fn register_click(&mut self, now: Duration) -> ResetProgress {
        if let Some(last) = self.last_click {
            if now.saturating_sub(last) > CONFIRM_WINDOW {
                self.clicks_remaining = CONFIRM_CLICKS;
            }
        }
        self.last_click = Some(now);

        if self.clicks_remaining > 2 {
            self.clicks_remaining -= 1;
            ResetProgress::Countdown {
                clicks_remaining: self.clicks_remaining,
            }
        } else if self.clicks_remaining == 2 {
            self.clicks_remaining = 1;
            ResetProgress::ConfirmWarning
        } else {
            self.clicks_remaining = CONFIRM_CLICKS;
            self.last_click = None;
            ResetProgress::Triggered
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(value: u64) -> Duration {
        Duration::from_secs(value)
    }

    #[test]
    fn five_quick_clicks_trigger_the_reset() {
        let mut machine = ResetConfirmMachine::default();

        assert_eq!(
            machine.register_click(secs(0)),
            ResetProgress::Countdown {
                clicks_remaining: 4
            }
        );
        assert_eq!(
            machine.register_click(secs(1)),
            ResetProgress::Countdown {
                clicks_remaining: 3
            }
        );
        assert_eq!(
            machine.register_click(secs(2)),
            ResetProgress::Countdown {
                clicks_remaining: 2
            }
        );
        assert_eq!(machine.register_click(secs(3)), ResetProgress::ConfirmWarning);
        assert_eq!(machine.register_click(secs(4)), ResetProgress::Triggered);

        // Armed again from the top.
        assert_eq!(machine.clicks_remaining(), CONFIRM_CLICKS);
    }

    #[test]
    fn a_long_gap_abandons_progress() {
        let mut machine = ResetConfirmMachine::default();
        machine.register_click(secs(0));
        machine.register_click(secs(1));
        machine.register_click(secs(2));

        // Over five seconds since the last click: back to a fresh countdown.
        assert_eq!(
            machine.register_click(secs(8)),
            ResetProgress::Countdown {
                clicks_remaining: 4
            }
        );
    }

    #[test]
    fn a_gap_of_exactly_five_seconds_keeps_progress() {
        let mut machine = ResetConfirmMachine::default();
        machine.register_click(secs(0));
        assert_eq!(
            machine.register_click(secs(5)),
            ResetProgress::Countdown {
                clicks_remaining: 3
            }
        );
    }

    #[test]
    fn sequence_can_run_again_after_triggering() {
        let mut machine = ResetConfirmMachine::default();
        for tick in 0..5 {
            machine.register_click(secs(tick));
        }
        for tick in 10..14 {
            machine.register_click(secs(tick));
        }
        assert_eq!(machine.register_click(secs(14)), ResetProgress::Triggered);
    }
}
