//! The validated request that drives one scheduling run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::time::{ClockTime, Minutes};

/// Event constraints: date, start time, total duration, and attendee count.
/// Immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventConstraints {
    pub date: NaiveDate,
    pub start: ClockTime,
    pub duration: Minutes,
    pub attendees: u32,
}

impl EventConstraints {
    pub fn new(date: NaiveDate, start: ClockTime, duration: Minutes, attendees: u32) -> Self {
        Self {
            date,
            start,
            duration,
            attendees,
        }
    }

    /// Absolute end of the whole requested window.
    pub fn end(&self) -> ClockTime {
        self.start + self.duration
    }
}
