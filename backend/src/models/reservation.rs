//! Pre-existing room reservations from the ledger file.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::time::{ClockTime, Minutes};

/// An existing booking for a room on a given date.
///
/// Identity is `(building, room, date, start)`. Reservations live in per-date
/// ledger buckets; an update may move one between buckets when its date
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub building: String,
    pub room: String,
    pub date: NaiveDate,
    pub start: ClockTime,
    pub duration: Minutes,
    pub booking_type: String,
}

impl Reservation {
    /// Whether this reservation belongs to the room identified by
    /// `(building, room)`.
    pub fn is_for_room(&self, building: &str, room: &str) -> bool {
        self.building == building && self.room == room
    }

    /// Identity match used by ledger delete/update operations.
    pub fn matches(&self, building: &str, room: &str, start: ClockTime) -> bool {
        self.is_for_room(building, room) && self.start == start
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.building,
            self.room,
            self.date.format("%Y-%m-%d"),
            self.start,
            self.duration,
            self.booking_type
        )
    }
}
