//! In-memory reservation ledger grouped by date.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{ClockTime, Reservation};

use super::error::{RepositoryError, RepositoryResult};

/// Collection of existing reservations bucketed by calendar day.
///
/// Buckets are unordered sets as far as the scheduler is concerned; the
/// collision checker scans a whole bucket per query. Mutations may move a
/// reservation between buckets when its date changes.
#[derive(Debug, Clone, Default)]
pub struct ReservationLedger {
    dates: HashMap<NaiveDate, Vec<Reservation>>,
}

impl ReservationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a reservation, dropping rows whose room identifier does not
    /// coerce to a positive integer. Returns `false` when dropped.
    pub fn add_reservation(&mut self, reservation: Reservation) -> bool {
        let room_number = reservation.room.trim().parse::<i64>().unwrap_or(0);
        if room_number <= 0 {
            log::warn!(
                "dropping ledger row for building {} room {:?}: non-positive room",
                reservation.building,
                reservation.room
            );
            return false;
        }

        self.dates
            .entry(reservation.date)
            .or_default()
            .push(reservation);
        true
    }

    /// All reservations on a date; empty when the date has no bucket.
    pub fn for_date(&self, date: NaiveDate) -> &[Reservation] {
        self.dates.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Remove the reservation identified by `(building, room, date, start)`.
    pub fn delete_reservation(
        &mut self,
        building: &str,
        room: &str,
        date: NaiveDate,
        start: ClockTime,
    ) -> RepositoryResult<Reservation> {
        let bucket = self
            .dates
            .get_mut(&date)
            .ok_or_else(|| Self::reservation_not_found(building, room, date, start))?;

        let position = bucket
            .iter()
            .position(|r| r.matches(building, room, start))
            .ok_or_else(|| Self::reservation_not_found(building, room, date, start))?;

        let removed = bucket.remove(position);
        if bucket.is_empty() {
            self.dates.remove(&date);
        }
        Ok(removed)
    }

    /// Replace the reservation identified by `(building, room, date, start)`
    /// with `updated`, moving it to a new date bucket when the date changed.
    pub fn update_reservation(
        &mut self,
        building: &str,
        room: &str,
        date: NaiveDate,
        start: ClockTime,
        updated: Reservation,
    ) -> RepositoryResult<()> {
        self.delete_reservation(building, room, date, start)?;
        self.dates.entry(updated.date).or_default().push(updated);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.dates.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn reservation_not_found(
        building: &str,
        room: &str,
        date: NaiveDate,
        start: ClockTime,
    ) -> RepositoryError {
        RepositoryError::not_found(
            "reservation",
            format!("{}/{} on {} at {}", building, room, date, start),
        )
    }
}
