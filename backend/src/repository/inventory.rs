//! In-memory room inventory grouped by building.
//!
//! Iteration order is the first-fit contract of the scheduler: buildings in
//! insertion order, rooms within a building in insertion order. The backing
//! store keeps an explicit building-order list next to the bucket map so the
//! guarantee is structural, not incidental.

use std::collections::HashMap;

use crate::models::Room;

/// Read-only (after loading) collection of rooms grouped by building.
#[derive(Debug, Clone, Default)]
pub struct RoomInventory {
    building_order: Vec<String>,
    buildings: HashMap<String, Vec<Room>>,
}

impl RoomInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room, enforcing the load-time data-quality policy: the room
    /// identifier must coerce to a positive integer and capacity must be
    /// positive. Returns `false` when the room was dropped.
    pub fn add_room(&mut self, room: Room) -> bool {
        let room_number = room.room.trim().parse::<i64>().unwrap_or(0);
        if room_number <= 0 || room.capacity == 0 {
            log::warn!(
                "dropping inventory row for building {} room {:?}: non-positive room or capacity",
                room.building,
                room.room
            );
            return false;
        }

        if !self.buildings.contains_key(&room.building) {
            self.building_order.push(room.building.clone());
        }
        self.buildings
            .entry(room.building.clone())
            .or_default()
            .push(room);
        true
    }

    /// Buildings in insertion order.
    pub fn buildings(&self) -> impl Iterator<Item = &str> {
        self.building_order.iter().map(String::as_str)
    }

    /// Rooms of one building in insertion order.
    pub fn rooms_in(&self, building: &str) -> &[Room] {
        self.buildings.get(building).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All rooms in first-fit enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.building_order
            .iter()
            .flat_map(move |b| self.buildings[b].iter())
    }

    pub fn len(&self) -> usize {
        self.buildings.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
