//! Room inventory entities.

pub mod gender;
pub mod key;
pub mod model;

pub use gender::Gender;
pub use key::RoomKey;
pub use model::{OccupancyState, OccupancySummary, Room, RoomVacancy};
