//! Natural key of a room.

use serde::{Deserialize, Serialize};
use std::fmt;

use hostel_core::AppError;

use super::gender::Gender;

/// Identifies a room by its position in the grid.
///
/// Ordering is total so callers that lock several rooms can always take
/// the locks in the same order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomKey {
    /// Gender partition.
    pub gender: Gender,
    /// Block letter, upper case.
    pub block: String,
    /// Room number within the block.
    pub room_no: i64,
}

impl RoomKey {
    /// Build a key, normalising the block letter to upper case.
    pub fn new(gender: Gender, block: impl AsRef<str>, room_no: i64) -> Self {
        Self {
            gender,
            block: block.as_ref().trim().to_uppercase(),
            room_no,
        }
    }

    /// Parse a key from untyped request fields.
    pub fn parse(gender: &str, block: &str, room_no: i64) -> Result<Self, AppError> {
        let gender = gender.parse::<Gender>()?;
        if block.trim().is_empty() {
            return Err(AppError::validation("Block is required"));
        }
        if room_no <= 0 {
            return Err(AppError::validation(format!(
                "Invalid room number: {room_no}"
            )));
        }
        Ok(Self::new(gender, block, room_no))
    }
}

impl fmt::Display for RoomKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.gender, self.block, self.room_no)
    }
}
