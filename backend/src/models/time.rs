//! Minute-granularity clock types used throughout the planner.
//!
//! All scheduling arithmetic runs on whole minutes so phase-boundary
//! comparisons are exact integer equality, never float comparisons.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Errors produced when parsing user-facing time strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeParseError {
    #[error("invalid time \"{0}\", use the format <hh:mm AM/PM>")]
    Time(String),
    #[error("invalid duration \"{0}\", use the format <hh:mm>")]
    Duration(String),
}

/// An elapsed span of whole minutes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Minutes(i32);

impl Minutes {
    pub const ZERO: Minutes = Minutes(0);

    pub const fn new(minutes: i32) -> Self {
        Self(minutes)
    }

    /// Span of `h` whole hours.
    pub const fn hours(h: i32) -> Self {
        Self(h * 60)
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    /// Parse an elapsed duration in 24-hour `hh:mm` form (e.g. `"10:00"`,
    /// `"9:30"`). This is elapsed time, not wall-clock time.
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeParseError> {
        let t = chrono::NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map_err(|_| TimeParseError::Duration(s.to_string()))?;
        use chrono::Timelike;
        Ok(Self(t.hour() as i32 * 60 + t.minute() as i32))
    }
}

impl Add for Minutes {
    type Output = Minutes;

    fn add(self, rhs: Minutes) -> Minutes {
        Minutes(self.0 + rhs.0)
    }
}

impl Sub for Minutes {
    type Output = Minutes;

    fn sub(self, rhs: Minutes) -> Minutes {
        Minutes(self.0 - rhs.0)
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0.rem_euclid(60))
    }
}

/// A time-of-day cursor in minutes since midnight.
///
/// Values may exceed 24:00 while a run's arithmetic walks past midnight;
/// formatting wraps back onto the clock face.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct ClockTime(i32);

impl ClockTime {
    pub fn new(minutes_since_midnight: i32) -> Self {
        Self(minutes_since_midnight)
    }

    pub fn from_hm(hour: i32, minute: i32) -> Self {
        Self(hour * 60 + minute)
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    /// Parse a wall-clock time in `hh:mm AM/PM` form (e.g. `"09:00 AM"`).
    pub fn parse_meridiem(s: &str) -> Result<Self, TimeParseError> {
        let t = chrono::NaiveTime::parse_from_str(s.trim(), "%I:%M %p")
            .map_err(|_| TimeParseError::Time(s.to_string()))?;
        use chrono::Timelike;
        Ok(Self(t.hour() as i32 * 60 + t.minute() as i32))
    }

    /// Format on the 12-hour clock (`%I:%M %p`), wrapping past midnight.
    pub fn format_meridiem(&self) -> String {
        let wrapped = self.0.rem_euclid(24 * 60);
        let t = chrono::NaiveTime::from_hms_opt(wrapped as u32 / 60, wrapped as u32 % 60, 0)
            .unwrap_or(chrono::NaiveTime::MIN);
        t.format("%I:%M %p").to_string()
    }
}

impl Add<Minutes> for ClockTime {
    type Output = ClockTime;

    fn add(self, rhs: Minutes) -> ClockTime {
        ClockTime(self.0 + rhs.value())
    }
}

impl Sub<Minutes> for ClockTime {
    type Output = ClockTime;

    fn sub(self, rhs: Minutes) -> ClockTime {
        ClockTime(self.0 - rhs.value())
    }
}

impl Sub for ClockTime {
    type Output = Minutes;

    fn sub(self, rhs: ClockTime) -> Minutes {
        Minutes::new(self.0 - rhs.0)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_meridiem())
    }
}
