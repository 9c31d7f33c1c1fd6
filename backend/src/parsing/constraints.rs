//! Validation of user-entered event constraints.
//!
//! Each parser rejects malformed input with a message naming the expected
//! format; the interactive front end re-prompts on error with no retry
//! limit.

use chrono::NaiveDate;

use crate::models::{ClockTime, Minutes};

/// Rejected interactive input, with the expected format in the message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Invalid date, use the format <yyyy-mm-dd>")]
    Date,
    #[error("Invalid time, use the format <hh:mm AM/PM>")]
    Time,
    #[error("Invalid duration, use the format <hh:mm>")]
    Duration,
    #[error("Invalid number of attendees, use a positive integer")]
    Attendees,
}

/// Parse the event date (`yyyy-mm-dd`).
pub fn parse_event_date(input: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| InputError::Date)
}

/// Parse the event start time (`hh:mm AM/PM`).
pub fn parse_event_time(input: &str) -> Result<ClockTime, InputError> {
    ClockTime::parse_meridiem(input).map_err(|_| InputError::Time)
}

/// Parse the event duration (24-hour elapsed `hh:mm`); both `9:30` and
/// `09:30` are accepted.
pub fn parse_event_duration(input: &str) -> Result<Minutes, InputError> {
    Minutes::parse_hhmm(input).map_err(|_| InputError::Duration)
}

/// Parse the attendee count (positive integer string).
pub fn parse_attendees(input: &str) -> Result<u32, InputError> {
    let trimmed = input.trim();
    match trimmed.parse::<u32>() {
        Ok(n) if n > 0 && trimmed == n.to_string() => Ok(n),
        _ => Err(InputError::Attendees),
    }
}
