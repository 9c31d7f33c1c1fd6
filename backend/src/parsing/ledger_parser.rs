//! Reservation ledger CSV parsing.
//!
//! Expected header: `Building, Room, Date, Time, Duration, Booking Type`
//! with `Date` as `YYYY-MM-DD`, `Time` as `hh:mm AM/PM`, and `Duration` as
//! 24-hour elapsed `hh:mm`. Rows with a non-positive Room, rows with
//! malformed date/time fields, and rows that fail CSV deserialization are
//! all dropped here, at load, so no malformed value ever reaches the
//! collision arithmetic. Only opening the file can fail the load.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::{ClockTime, Minutes, Reservation};
use crate::repository::ReservationLedger;

/// Raw ledger row exactly as it appears in the file.
#[derive(Debug, Deserialize)]
struct ReservationRow {
    #[serde(rename = "Building")]
    building: String,
    #[serde(rename = "Room")]
    room: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Time")]
    time: String,
    #[serde(rename = "Duration")]
    duration: String,
    #[serde(rename = "Booking Type")]
    booking_type: String,
}

impl ReservationRow {
    fn into_reservation(self) -> Option<Reservation> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()?;
        let start = ClockTime::parse_meridiem(&self.time).ok()?;
        let duration = Minutes::parse_hhmm(&self.duration).ok()?;
        Some(Reservation {
            building: self.building,
            room: self.room,
            date,
            start,
            duration,
            booking_type: self.booking_type,
        })
    }
}

/// Parse a reservation ledger file into a `ReservationLedger`.
pub fn parse_ledger_csv(path: &Path) -> Result<ReservationLedger> {
    let reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open ledger file {}", path.display()))?;
    parse_ledger(reader)
}

/// Parse ledger rows from any reader (used by tests and the loader).
pub fn parse_ledger_reader<R: Read>(reader: R) -> Result<ReservationLedger> {
    parse_ledger(csv::Reader::from_reader(reader))
}

fn parse_ledger<R: Read>(mut reader: csv::Reader<R>) -> Result<ReservationLedger> {
    let mut ledger = ReservationLedger::new();
    let mut dropped = 0usize;

    for (index, record) in reader.deserialize::<ReservationRow>().enumerate() {
        let row = match record {
            Ok(row) => row,
            Err(err) => {
                log::warn!("dropping malformed ledger row {}: {}", index + 1, err);
                dropped += 1;
                continue;
            }
        };
        match row.into_reservation() {
            Some(reservation) => {
                if !ledger.add_reservation(reservation) {
                    dropped += 1;
                }
            }
            None => {
                log::warn!(
                    "dropping ledger row {}: unparseable date, time, or duration",
                    index + 1
                );
                dropped += 1;
            }
        }
    }

    if dropped > 0 {
        log::info!("ledger load dropped {} invalid row(s)", dropped);
    }
    Ok(ledger)
}
