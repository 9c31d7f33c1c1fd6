//! Generated plan: typed phases and time-bounded segments.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::room::Room;
use super::time::{ClockTime, Minutes};

/// Stage of the generated agenda, each with its own room-eligibility rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Opening,
    Work,
    Meal,
    Closing,
}

impl Phase {
    /// Label used in the report's segment header rows.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Opening => "Opening Room",
            Phase::Work => "Work Rooms",
            Phase::Meal => "Meal Rooms",
            Phase::Closing => "Closing Room",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Opening => "Opening",
            Phase::Work => "Work",
            Phase::Meal => "Meal",
            Phase::Closing => "Closing",
        };
        write!(f, "{}", name)
    }
}

/// One concrete, time-bounded instance of a phase with its assigned rooms.
///
/// Opening and Closing segments hold exactly one room; Work and Meal segments
/// may hold many. Immutable once emitted by the scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSegment {
    pub phase: Phase,
    pub start: ClockTime,
    pub end: ClockTime,
    pub rooms: Vec<Room>,
}

impl ScheduleSegment {
    pub fn new(phase: Phase, start: ClockTime, end: ClockTime, rooms: Vec<Room>) -> Self {
        Self {
            phase,
            start,
            end,
            rooms,
        }
    }

    pub fn duration(&self) -> Minutes {
        self.end - self.start
    }

    /// Report header row for this segment, e.g.
    /// `Work Rooms - 10:00 AM to 04:00 PM`.
    pub fn label(&self) -> String {
        format!(
            "{} - {} to {}",
            self.phase.label(),
            self.start.format_meridiem(),
            self.end.format_meridiem()
        )
    }
}

/// The ordered segment sequence produced by one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulePlan {
    pub segments: Vec<ScheduleSegment>,
}

impl SchedulePlan {
    pub fn new(segments: Vec<ScheduleSegment>) -> Self {
        Self { segments }
    }

    /// Start of the first segment and end of the last, if any.
    pub fn span(&self) -> Option<(ClockTime, ClockTime)> {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => Some((first.start, last.end)),
            _ => None,
        }
    }

    /// True when every segment starts exactly where the previous one ended.
    pub fn is_contiguous(&self) -> bool {
        self.segments
            .windows(2)
            .all(|pair| pair[0].end == pair[1].start)
    }
}
