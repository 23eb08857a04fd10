//! Room inventory repository.

use sqlx::SqlitePool;
use tracing::info;

use hostel_core::config::InventoryConfig;
use hostel_core::error::{AppError, ErrorKind};
use hostel_core::result::AppResult;
use hostel_entity::room::{Gender, OccupancySummary, Room, RoomKey, RoomVacancy};

/// Repository over the `rooms` table.
#[derive(Debug, Clone)]
pub struct RoomRepository {
    pool: SqlitePool,
}

impl RoomRepository {
    /// Create a new room repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert every room of the configured grid that does not exist yet.
    ///
    /// Existing rows keep their occupant counts. Returns the number of rooms
    /// created.
    pub async fn seed_grid(&self, inventory: &InventoryConfig) -> AppResult<u64> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin seed transaction", e)
        })?;

        let mut created = 0;
        for gender in Gender::ALL {
            for block in &inventory.blocks {
                let block = block.trim().to_uppercase();
                for room_no in inventory.room_numbers() {
                    let result = sqlx::query(
                        "INSERT OR IGNORE INTO rooms (gender, block, room_no, occupants) \
                         VALUES (?, ?, ?, 0)",
                    )
                    .bind(gender)
                    .bind(&block)
                    .bind(room_no)
                    .execute(&mut *tx)
                    .await
                    .map_err(|e| {
                        AppError::with_source(ErrorKind::Database, "Failed to seed room", e)
                    })?;
                    created += result.rows_affected();
                }
            }
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit room seed", e)
        })?;

        info!(created, "Room grid seeded");
        Ok(created)
    }

    /// Rooms of one gender and block, ordered by room number.
    pub async fn list_by(&self, gender: Gender, block: &str) -> AppResult<Vec<RoomVacancy>> {
        sqlx::query_as::<_, RoomVacancy>(
            "SELECT room_no, occupants FROM rooms WHERE gender = ? AND block = ? \
             ORDER BY room_no",
        )
        .bind(gender)
        .bind(block.trim().to_uppercase())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list rooms", e))
    }

    /// Every room in grid order.
    pub async fn list_all(&self) -> AppResult<Vec<Room>> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms ORDER BY gender, block, room_no")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list rooms", e))
    }

    /// Find a room by its natural key.
    pub async fn find_by_key(&self, key: &RoomKey) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>(
            "SELECT * FROM rooms WHERE gender = ? AND block = ? AND room_no = ?",
        )
        .bind(key.gender)
        .bind(&key.block)
        .bind(key.room_no)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find room", e))
    }

    /// Total capacity and occupancy across the grid.
    pub async fn summary(&self) -> AppResult<OccupancySummary> {
        let (room_count, total_occupied): (i64, i64) =
            sqlx::query_as("SELECT COUNT(*), COALESCE(SUM(occupants), 0) FROM rooms")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to summarise rooms", e)
                })?;

        Ok(OccupancySummary::new(room_count, total_occupied))
    }
}
