//! Room records from the building inventory.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Room type string that marks a room as a computer lab. Room types are an
/// open set; this is the only value the scheduler treats specially.
pub const COMPUTER_LAB: &str = "Computer Lab";

/// A physical room as loaded from the inventory file.
///
/// Immutable once loaded. Identity is `(building, room)`; the room identifier
/// is kept as the loaded string (it must be numeric-coercible and positive,
/// which the load path enforces) so it round-trips through the report
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub building: String,
    pub room: String,
    pub capacity: u32,
    pub computers_available: String,
    pub seating_available: String,
    pub seating_type: String,
    pub food_allowed: String,
    pub priority: String,
    pub room_type: String,
}

impl Room {
    /// Identity key: same building and same room identifier.
    pub fn key(&self) -> (&str, &str) {
        (&self.building, &self.room)
    }

    /// Whether this room is distinguished as a computer lab.
    pub fn is_computer_lab(&self) -> bool {
        self.room_type == COMPUTER_LAB
    }

    /// The nine report attributes in output-contract order.
    pub fn to_record(&self) -> [String; 9] {
        [
            self.building.clone(),
            self.room.clone(),
            self.capacity.to_string(),
            self.computers_available.clone(),
            self.seating_available.clone(),
            self.seating_type.clone(),
            self.food_allowed.clone(),
            self.priority.clone(),
            self.room_type.clone(),
        ]
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_record().join(","))
    }
}
