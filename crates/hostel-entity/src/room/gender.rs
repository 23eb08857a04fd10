//! Gender partition of the room grid.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which half of the hostel a room belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male rooms.
    #[serde(alias = "boys")]
    Male,
    /// Female rooms.
    #[serde(alias = "girls")]
    Female,
}

impl Gender {
    /// Every gender, in seeding order.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Return the gender as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = hostel_core::AppError;

    /// Accepts `male`/`female` and the `boys`/`girls` labels the booking
    /// page sends, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "boys" | "boy" => Ok(Self::Male),
            "female" | "girls" | "girl" => Ok(Self::Female),
            _ => Err(hostel_core::AppError::validation(format!(
                "Invalid gender: '{s}'. Expected one of: male, female"
            ))),
        }
    }
}
