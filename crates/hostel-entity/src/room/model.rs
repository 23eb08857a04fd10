//! Room entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use hostel_core::config::inventory::ROOM_CAPACITY;
use hostel_core::types::RoomId;

use super::gender::Gender;
use super::key::RoomKey;

/// A room in the fixed grid together with its current occupancy.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Room {
    /// Row id.
    pub id: RoomId,
    /// Gender partition.
    pub gender: Gender,
    /// Block letter.
    pub block: String,
    /// Room number within the block.
    pub room_no: i64,
    /// Number of current occupants, `0..=ROOM_CAPACITY`.
    pub occupants: i64,
}

impl Room {
    /// The room's natural key.
    pub fn key(&self) -> RoomKey {
        RoomKey::new(self.gender, &self.block, self.room_no)
    }

    /// Whether another occupant can be added.
    pub fn has_vacancy(&self) -> bool {
        self.occupants < ROOM_CAPACITY
    }

    /// Free places left.
    pub fn vacancies(&self) -> i64 {
        (ROOM_CAPACITY - self.occupants).max(0)
    }
}

/// Per-room vacancy row returned by `/api/rooms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct RoomVacancy {
    /// Room number.
    pub room_no: i64,
    /// Current occupants.
    pub occupants: i64,
}

/// Hostel-wide occupancy state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OccupancyState {
    /// Every place is taken.
    Full,
    /// At least one place is free.
    Vacant,
}

/// Aggregate capacity versus occupancy across the whole grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancySummary {
    /// Room count times capacity.
    pub total_capacity: i64,
    /// Sum of occupants over all rooms.
    pub total_occupied: i64,
}

impl OccupancySummary {
    /// Build a summary from a room count and total occupant count.
    pub fn new(room_count: i64, total_occupied: i64) -> Self {
        Self {
            total_capacity: room_count * ROOM_CAPACITY,
            total_occupied,
        }
    }

    /// `Full` once occupancy reaches capacity.
    pub fn state(&self) -> OccupancyState {
        if self.total_occupied >= self.total_capacity {
            OccupancyState::Full
        } else {
            OccupancyState::Vacant
        }
    }
}
