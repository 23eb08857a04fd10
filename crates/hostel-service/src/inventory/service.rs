//! Inventory service: room vacancy listings and hostel-wide occupancy.

use std::sync::Arc;

use tracing::debug;

use hostel_core::config::InventoryConfig;
use hostel_core::error::AppError;
use hostel_database::repositories::RoomRepository;
use hostel_entity::room::{Gender, OccupancySummary, Room, RoomVacancy};

/// Read side of the room grid, plus seeding.
#[derive(Debug, Clone)]
pub struct InventoryService {
    /// Room repository.
    room_repo: Arc<RoomRepository>,
}

impl InventoryService {
    /// Creates a new inventory service.
    pub fn new(room_repo: Arc<RoomRepository>) -> Self {
        Self { room_repo }
    }

    /// Rooms of one gender and block, ordered by room number.
    ///
    /// The gender accepts the `boys`/`girls` labels; anything else is a
    /// validation error. An unknown block yields an empty list.
    pub async fn list_rooms(&self, gender: &str, block: &str) -> Result<Vec<RoomVacancy>, AppError> {
        let gender = gender.parse::<Gender>()?;
        let rooms = self.room_repo.list_by(gender, block).await?;
        debug!(%gender, block, count = rooms.len(), "Listed rooms");
        Ok(rooms)
    }

    /// Every room in the grid.
    pub async fn list_all(&self) -> Result<Vec<Room>, AppError> {
        self.room_repo.list_all().await
    }

    /// Total capacity against total occupancy.
    pub async fn aggregate_status(&self) -> Result<OccupancySummary, AppError> {
        self.room_repo.summary().await
    }

    /// Creates any missing rooms of the configured grid.
    pub async fn seed(&self, inventory: &InventoryConfig) -> Result<u64, AppError> {
        inventory.validate()?;
        self.room_repo.seed_grid(inventory).await
    }
}
