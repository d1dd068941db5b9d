//! The in-game calendar date.
use std::fmt;

use bevy::prelude::Resource;
use serde::Serialize;

/// Date a fresh campaign opens on.
pub const CAMPAIGN_START: GameDate = GameDate {
    year: 2025,
    month: 11,
    day: 1,
};

/// Current in-game date. Advances exactly one day per end-of-day turn and
/// is never moved by anything else. Fields stay private so `new` and
/// `advance` are the only ways a date can change.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameDate {
    year: i32,
    month: u8,
    day: u8,
}

impl GameDate {
    /// Builds a validated date; `None` when the month or day is outside the
    /// calendar.
    pub fn new(year: i32, month: u8, day: u8) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        if day == 0 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Moves to the next calendar day, rolling months and years over.
    pub fn advance(&mut self) {
        if self.day < days_in_month(self.year, self.month) {
            self.day += 1;
        } else {
            self.day = 1;
            if self.month < 12 {
                self.month += 1;
            } else {
                self.month = 1;
                self.year += 1;
            }
        }
    }
}

impl Default for GameDate {
    fn default() -> Self {
        CAMPAIGN_START
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Number of days in the given month, accounting for leap years.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
