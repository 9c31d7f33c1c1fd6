//! Room inventory CSV parsing.
//!
//! Expected header: `Building, Room, Capacity, Computers Available,
//! Seating Available, Seating Type, Food Allowed, Priority, Room Type`.
//! Rows with a non-positive Room or Capacity, and rows that fail CSV
//! deserialization, are dropped, never surfaced as errors (load-time
//! data-quality policy). Only opening the file can fail the load.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::Room;
use crate::repository::RoomInventory;

/// Raw inventory row exactly as it appears in the file.
#[derive(Debug, Deserialize)]
struct RoomRow {
    #[serde(rename = "Building")]
    building: String,
    #[serde(rename = "Room")]
    room: String,
    #[serde(rename = "Capacity")]
    capacity: String,
    #[serde(rename = "Computers Available")]
    computers_available: String,
    #[serde(rename = "Seating Available")]
    seating_available: String,
    #[serde(rename = "Seating Type")]
    seating_type: String,
    #[serde(rename = "Food Allowed")]
    food_allowed: String,
    #[serde(rename = "Priority")]
    priority: String,
    #[serde(rename = "Room Type")]
    room_type: String,
}

impl RoomRow {
    /// Convert to a domain `Room`, or `None` when the row fails the
    /// positivity checks.
    fn into_room(self) -> Option<Room> {
        let capacity = self.capacity.trim().parse::<u32>().ok()?;
        if capacity == 0 {
            return None;
        }
        Some(Room {
            building: self.building,
            room: self.room,
            capacity,
            computers_available: self.computers_available,
            seating_available: self.seating_available,
            seating_type: self.seating_type,
            food_allowed: self.food_allowed,
            priority: self.priority,
            room_type: self.room_type,
        })
    }
}

/// Parse an inventory file into a `RoomInventory`.
pub fn parse_inventory_csv(path: &Path) -> Result<RoomInventory> {
    let reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open inventory file {}", path.display()))?;
    parse_inventory(reader)
}

/// Parse inventory rows from any reader (used by tests and the loader).
pub fn parse_inventory_reader<R: Read>(reader: R) -> Result<RoomInventory> {
    parse_inventory(csv::Reader::from_reader(reader))
}

fn parse_inventory<R: Read>(mut reader: csv::Reader<R>) -> Result<RoomInventory> {
    let mut inventory = RoomInventory::new();
    let mut dropped = 0usize;

    for (index, record) in reader.deserialize::<RoomRow>().enumerate() {
        let row = match record {
            Ok(row) => row,
            Err(err) => {
                log::warn!("dropping malformed inventory row {}: {}", index + 1, err);
                dropped += 1;
                continue;
            }
        };
        match row.into_room() {
            Some(room) => {
                if !inventory.add_room(room) {
                    dropped += 1;
                }
            }
            None => {
                log::warn!("dropping inventory row {}: non-positive capacity", index + 1);
                dropped += 1;
            }
        }
    }

    if dropped > 0 {
        log::info!("inventory load dropped {} invalid row(s)", dropped);
    }
    Ok(inventory)
}
