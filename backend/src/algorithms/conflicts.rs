//! Collision detection between candidate segments and existing reservations.

use chrono::NaiveDate;

use crate::models::{ClockTime, Minutes, Room};
use crate::repository::ReservationLedger;

/// Half-open interval overlap: `[a, a+da)` intersects `[b, b+db)`.
pub fn windows_overlap(
    a_start: ClockTime,
    a_duration: Minutes,
    b_start: ClockTime,
    b_duration: Minutes,
) -> bool {
    let a_end = a_start + a_duration;
    let b_end = b_start + b_duration;
    a_end > b_start && a_start < b_end
}

/// Reports whether a candidate time window for a room collides with any
/// ledger entry for the same room on the same date.
///
/// Read-only view over the ledger; each query scans the date's bucket once,
/// so cost is O(reservations on that date).
pub struct CollisionChecker<'a> {
    ledger: &'a ReservationLedger,
}

impl<'a> CollisionChecker<'a> {
    pub fn new(ledger: &'a ReservationLedger) -> Self {
        Self { ledger }
    }

    /// True when any reservation for `room` on `date` intersects
    /// `[window_start, window_start + window_duration)`.
    pub fn has_collision(
        &self,
        room: &Room,
        date: NaiveDate,
        window_start: ClockTime,
        window_duration: Minutes,
    ) -> bool {
        self.ledger
            .for_date(date)
            .iter()
            .filter(|r| r.is_for_room(&room.building, &room.room))
            .any(|r| windows_overlap(window_start, window_duration, r.start, r.duration))
    }
}
