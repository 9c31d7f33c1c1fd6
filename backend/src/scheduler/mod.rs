//! Phase scheduler: the multi-phase greedy room allocator.
//!
//! One run walks the inventory in first-fit order through the phase sequence
//! `OPENING -> WORK -> (MEAL -> WORK)* -> CLOSING`, emitting one typed
//! [`ScheduleSegment`] per phase. All arithmetic is integer minutes; the
//! mandatory closing block is the final three hours of the requested window
//! and the work-block length is capped at six hours.
//!
//! Every phase performs exactly one full enumeration pass over the
//! inventory. A pass that ends without satisfying the phase's close
//! condition fails the run with [`ScheduleError::Infeasible`] instead of
//! retrying forever.

use crate::algorithms::CollisionChecker;
use crate::models::{
    ClockTime, EventConstraints, Minutes, Phase, Room, SchedulePlan, ScheduleSegment,
};
use crate::repository::{ReservationLedger, RoomInventory};

/// Fixed opening block length.
const OPENING_LEN: Minutes = Minutes::new(60);
/// Nominal meal block length.
const MEAL_LEN: Minutes = Minutes::new(60);
/// Mandatory closing block length.
const CLOSING_LEN: Minutes = Minutes::new(180);
/// Upper bound on a single work block.
const WORK_CAP: Minutes = Minutes::new(360);

/// Result type for scheduling runs.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Errors terminating a scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// A full enumeration pass found no way to close the phase: scheduling
    /// is infeasible for the given constraints.
    #[error("no eligible room combination for the {phase} phase starting at {at}; scheduling is infeasible for the given constraints")]
    Infeasible { phase: Phase, at: ClockTime },

    /// The requested window cannot hold the fixed opening and closing
    /// blocks plus any work time.
    #[error("requested duration {requested} is too short: the plan needs a 1-hour opening, a 3-hour closing, and at least some work time")]
    WindowTooShort { requested: Minutes },

    /// A meal advance overshot the start of the mandatory closing window.
    #[error("phase arithmetic overshot the closing window at {at}; the requested duration does not decompose into whole phase blocks")]
    WindowArithmetic { at: ClockTime },
}

/// Mutable cross-phase state for one run: the time cursor and the segments
/// emitted so far. Created fresh per `generate_plan` call, so repeated runs
/// over the same inputs are independent and identical.
struct SchedulerState {
    cursor: ClockTime,
    segments: Vec<ScheduleSegment>,
}

impl SchedulerState {
    fn emit(&mut self, phase: Phase, length: Minutes, rooms: Vec<Room>) {
        let end = self.cursor + length;
        log::debug!(
            "{} phase closed: {} -> {} with {} room(s)",
            phase,
            self.cursor,
            end,
            rooms.len()
        );
        self.segments
            .push(ScheduleSegment::new(phase, self.cursor, end, rooms));
        self.cursor = end;
    }
}

/// Greedy first-fit scheduler over a consistent snapshot of the inventory
/// and ledger. Borrows both for the duration of the run; a run never
/// mutates them.
pub struct PhaseScheduler<'a> {
    inventory: &'a RoomInventory,
    checker: CollisionChecker<'a>,
    constraints: &'a EventConstraints,
}

impl<'a> PhaseScheduler<'a> {
    pub fn new(
        inventory: &'a RoomInventory,
        ledger: &'a ReservationLedger,
        constraints: &'a EventConstraints,
    ) -> Self {
        Self {
            inventory,
            checker: CollisionChecker::new(ledger),
            constraints,
        }
    }

    /// Generate the ordered segment sequence for the configured constraints.
    ///
    /// The returned plan is contiguous and spans exactly
    /// `[start, start + duration)`.
    pub fn generate_plan(&self) -> ScheduleResult<SchedulePlan> {
        if self.constraints.duration <= OPENING_LEN + CLOSING_LEN {
            return Err(ScheduleError::WindowTooShort {
                requested: self.constraints.duration,
            });
        }

        let closing_start = self.constraints.end() - CLOSING_LEN;
        let mut state = SchedulerState {
            cursor: self.constraints.start,
            segments: Vec::new(),
        };

        let opening_room = self.find_opening_room(state.cursor)?;
        state.emit(Phase::Opening, OPENING_LEN, vec![opening_room.clone()]);

        loop {
            let work_len = (closing_start - state.cursor).min(WORK_CAP);
            if work_len <= Minutes::ZERO {
                return Err(ScheduleError::WindowArithmetic { at: state.cursor });
            }

            let work_rooms = self.collect_work_rooms(state.cursor, work_len, &opening_room)?;
            state.emit(Phase::Work, work_len, work_rooms);
            if state.cursor == closing_start {
                break;
            }

            let meal_rooms = self.collect_meal_rooms(state.cursor, &opening_room)?;
            state.emit(Phase::Meal, MEAL_LEN, meal_rooms);
            if state.cursor == closing_start {
                break;
            }
            if state.cursor > closing_start {
                return Err(ScheduleError::WindowArithmetic { at: state.cursor });
            }
        }

        let closing_room = self.choose_closing_room(state.cursor, &opening_room)?;
        state.emit(Phase::Closing, CLOSING_LEN, vec![closing_room]);

        debug_assert_eq!(state.cursor, self.constraints.end());
        log::info!(
            "plan generated: {} segment(s), {} -> {}",
            state.segments.len(),
            self.constraints.start,
            self.constraints.end()
        );
        Ok(SchedulePlan::new(state.segments))
    }

    /// First room, in enumeration order, that seats everyone, is not a
    /// computer lab, and is free for the one-hour opening window.
    fn find_opening_room(&self, at: ClockTime) -> ScheduleResult<Room> {
        self.inventory
            .iter()
            .find(|room| {
                room.capacity >= self.constraints.attendees
                    && !room.is_computer_lab()
                    && self.is_free(room, at, OPENING_LEN)
            })
            .cloned()
            .ok_or(ScheduleError::Infeasible {
                phase: Phase::Opening,
                at,
            })
    }

    /// Accumulate work rooms for the window `[at, at + len)`.
    ///
    /// A collision-free non-lab room is admitted only while the admitted
    /// seat count stays below the attendee target, reserving headroom for a
    /// lab. A computer lab is admitted when one seat can serve ten
    /// attendees (`capacity * 10 >= attendees`), and contributes that
    /// ten-fold coverage. The phase closes once total coverage reaches the
    /// attendee count and at least one qualifying lab has been admitted.
    fn collect_work_rooms(
        &self,
        at: ClockTime,
        len: Minutes,
        opening_room: &Room,
    ) -> ScheduleResult<Vec<Room>> {
        let target = u64::from(self.constraints.attendees);
        let mut rooms: Vec<Room> = Vec::new();
        let mut seat_count: u64 = 0;
        let mut coverage: u64 = 0;
        let mut lab_admitted = false;

        for room in self.inventory.iter() {
            if room.key() == opening_room.key() || !self.is_free(room, at, len) {
                continue;
            }

            let capacity = u64::from(room.capacity);
            if room.is_computer_lab() {
                if capacity * 10 >= target {
                    rooms.push(room.clone());
                    coverage += capacity * 10;
                    lab_admitted = true;
                }
            } else if seat_count + capacity < target {
                rooms.push(room.clone());
                seat_count += capacity;
                coverage += capacity;
            }

            if lab_admitted && coverage >= target {
                return Ok(rooms);
            }
        }

        Err(ScheduleError::Infeasible {
            phase: Phase::Work,
            at,
        })
    }

    /// Accumulate meal rooms (any room type) for the one-hour window at
    /// `at`; closes once the admitted capacity covers every attendee and at
    /// least two distinct rooms are chosen.
    fn collect_meal_rooms(&self, at: ClockTime, opening_room: &Room) -> ScheduleResult<Vec<Room>> {
        let target = u64::from(self.constraints.attendees);
        let mut rooms: Vec<Room> = Vec::new();
        let mut seat_count: u64 = 0;

        for room in self.inventory.iter() {
            if room.key() == opening_room.key() || !self.is_free(room, at, MEAL_LEN) {
                continue;
            }

            rooms.push(room.clone());
            seat_count += u64::from(room.capacity);

            if seat_count >= target && rooms.len() >= 2 {
                return Ok(rooms);
            }
        }

        Err(ScheduleError::Infeasible {
            phase: Phase::Meal,
            at,
        })
    }

    /// Reuse the opening room iff it is still free for the closing window;
    /// otherwise fall back to the first collision-free non-lab room that
    /// seats everyone.
    fn choose_closing_room(&self, at: ClockTime, opening_room: &Room) -> ScheduleResult<Room> {
        if self.is_free(opening_room, at, CLOSING_LEN) {
            return Ok(opening_room.clone());
        }

        self.inventory
            .iter()
            .find(|room| {
                room.capacity >= self.constraints.attendees
                    && !room.is_computer_lab()
                    && self.is_free(room, at, CLOSING_LEN)
            })
            .cloned()
            .ok_or(ScheduleError::Infeasible {
                phase: Phase::Closing,
                at,
            })
    }

    fn is_free(&self, room: &Room, at: ClockTime, len: Minutes) -> bool {
        !self
            .checker
            .has_collision(room, self.constraints.date, at, len)
    }
}

#[cfg(test)]
mod tests;
