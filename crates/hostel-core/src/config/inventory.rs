//! Room grid configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Maximum occupants per room.
pub const ROOM_CAPACITY: i64 = 4;

/// Shape of the room grid seeded at startup.
///
/// One room is created for every (gender, block, room number) combination.
/// Genders are fixed (male/female); blocks and the number of rooms per block
/// are configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Block letters.
    #[serde(default = "default_blocks")]
    pub blocks: Vec<String>,
    /// Rooms per block, numbered from 1.
    #[serde(default = "default_rooms_per_block")]
    pub rooms_per_block: u32,
}

impl InventoryConfig {
    /// Check the grid is non-empty and every block is a single letter.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.blocks.is_empty() {
            return Err(AppError::configuration(
                "inventory.blocks must list at least one block",
            ));
        }
        if let Some(bad) = self.blocks.iter().find(|b| !is_block_letter(b)) {
            return Err(AppError::configuration(format!(
                "inventory.blocks entry '{bad}' is not a single letter"
            )));
        }
        if self.rooms_per_block == 0 {
            return Err(AppError::configuration(
                "inventory.rooms_per_block must be positive",
            ));
        }
        Ok(())
    }

    /// Room numbers present in every block.
    pub fn room_numbers(&self) -> impl Iterator<Item = i64> + '_ {
        1..=i64::from(self.rooms_per_block)
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            blocks: default_blocks(),
            rooms_per_block: default_rooms_per_block(),
        }
    }
}

fn is_block_letter(block: &str) -> bool {
    let mut chars = block.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_alphabetic())
}

fn default_blocks() -> Vec<String> {
    ["A", "B", "C", "D"].iter().map(|b| b.to_string()).collect()
}

fn default_rooms_per_block() -> u32 {
    5
}
