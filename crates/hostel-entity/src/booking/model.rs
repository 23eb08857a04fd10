//! Booking entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use hostel_core::types::BookingId;

use crate::room::{Gender, RoomKey};

/// A holder's reservation of one place in one room.
///
/// The room coordinates are a denormalized copy of the referenced room's key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Ledger id.
    pub id: BookingId,
    /// Holder identity (username). Unique across active bookings.
    pub name: String,
    /// Gender partition of the booked room.
    pub gender: Gender,
    /// Block of the booked room.
    pub block: String,
    /// Number of the booked room.
    pub room_no: i64,
    /// When the booking was made.
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Key of the room this booking occupies.
    pub fn room_key(&self) -> RoomKey {
        RoomKey::new(self.gender, &self.block, self.room_no)
    }
}

/// Replacement values for an administrative edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBooking {
    /// New holder identity.
    pub name: String,
    /// New room.
    pub room: RoomKey,
}
