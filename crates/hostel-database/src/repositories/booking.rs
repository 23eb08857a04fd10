//! Booking ledger repository.
//!
//! The mutating operations here are the transactional half of allocation:
//! each one runs in a single transaction that touches both `rooms` and
//! `bookings`, so either both tables change or neither does. Every
//! transaction opens with a write so SQLite takes the write lock before any
//! read, which keeps two writers from deadlocking on a lock upgrade.

use chrono::Utc;
use sqlx::{Sqlite, SqlitePool, Transaction};

use hostel_core::config::inventory::ROOM_CAPACITY;
use hostel_core::error::{AppError, ErrorKind};
use hostel_core::result::AppResult;
use hostel_core::types::BookingId;
use hostel_entity::booking::{Booking, UpdateBooking};
use hostel_entity::room::RoomKey;

use super::is_unique_violation;

const HOLDER_COLUMN: &str = "bookings.name";

/// Repository over the `bookings` table and the occupant counts it drives.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: SqlitePool,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a booking by id.
    pub async fn find_by_id(&self, id: BookingId) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find booking", e))
    }

    /// Find the booking held by `name`.
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find booking by holder", e)
            })
    }

    /// All bookings ordered by id.
    pub async fn list_all(&self) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list bookings", e))
    }

    /// Count bookings in one room.
    #[cfg(test)]
    pub async fn count_in_room(&self, room: &RoomKey) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM bookings WHERE gender = ? AND block = ? AND room_no = ?",
        )
        .bind(room.gender)
        .bind(&room.block)
        .bind(room.room_no)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count bookings", e))
    }

    /// Claim a place in `room` for `holder`.
    ///
    /// Rejections are reported in order: `AlreadyBooked`, `RoomNotFound`,
    /// `RoomFull`. A rejected call leaves both tables unchanged.
    pub async fn allocate(&self, holder: &str, room: &RoomKey) -> AppResult<Booking> {
        let mut tx = self.begin().await?;

        let claimed = claim_place(&mut tx, room).await?;

        if find_holder(&mut tx, holder).await?.is_some() {
            return Err(AppError::already_booked(format!(
                "'{holder}' already has a booking"
            )));
        }
        if !claimed {
            return Err(unavailable(&mut tx, room).await?);
        }

        let booking = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (name, gender, block, room_no, created_at) \
             VALUES (?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(holder)
        .bind(room.gender)
        .bind(&room.block)
        .bind(room.room_no)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| holder_conflict(e, holder, "Failed to insert booking"))?;

        commit(tx).await?;
        Ok(booking)
    }

    /// Delete a booking and free its place.
    ///
    /// Returns the deleted booking, or `None` when the id does not exist.
    pub async fn release(&self, id: BookingId) -> AppResult<Option<Booking>> {
        let mut tx = self.begin().await?;

        let deleted = sqlx::query_as::<_, Booking>("DELETE FROM bookings WHERE id = ? RETURNING *")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete booking", e))?;

        let Some(booking) = deleted else {
            return Ok(None);
        };

        vacate_place(&mut tx, &booking.room_key()).await?;
        commit(tx).await?;
        Ok(Some(booking))
    }

    /// Overwrite a booking, moving its place to the new room.
    ///
    /// The old room is decremented (never below zero) and the new room is
    /// incremented subject to capacity. Moving within the same room always
    /// succeeds.
    pub async fn reassign(&self, id: BookingId, update: &UpdateBooking) -> AppResult<Booking> {
        let mut tx = self.begin().await?;

        sqlx::query(
            "UPDATE rooms SET occupants = occupants - 1 \
             WHERE (gender, block, room_no) = \
                   (SELECT gender, block, room_no FROM bookings WHERE id = ?) \
               AND occupants > 0",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to vacate old room", e))?;

        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM bookings WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find booking", e))?;
        if exists.is_none() {
            return Err(AppError::not_found(format!("Booking {id} not found")));
        }

        if !claim_place(&mut tx, &update.room).await? {
            return Err(unavailable(&mut tx, &update.room).await?);
        }

        let booking = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET name = ?, gender = ?, block = ?, room_no = ? \
             WHERE id = ? RETURNING *",
        )
        .bind(&update.name)
        .bind(update.room.gender)
        .bind(&update.room.block)
        .bind(update.room.room_no)
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| holder_conflict(e, &update.name, "Failed to update booking"))?;

        commit(tx).await?;
        Ok(booking)
    }

    /// Delete every booking and zero every room. Returns the number of
    /// bookings removed.
    pub async fn reset_all(&self) -> AppResult<u64> {
        let mut tx = self.begin().await?;

        let removed = sqlx::query("DELETE FROM bookings")
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to clear bookings", e))?
            .rows_affected();

        sqlx::query("UPDATE rooms SET occupants = 0")
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to reset occupancy", e)
            })?;

        commit(tx).await?;
        Ok(removed)
    }

    async fn begin(&self) -> AppResult<Transaction<'static, Sqlite>> {
        self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })
    }
}

/// Take one place in `room` if it exists and has room. Returns whether a
/// place was taken.
async fn claim_place(tx: &mut Transaction<'_, Sqlite>, room: &RoomKey) -> AppResult<bool> {
    let result = sqlx::query(
        "UPDATE rooms SET occupants = occupants + 1 \
         WHERE gender = ? AND block = ? AND room_no = ? AND occupants < ?",
    )
    .bind(room.gender)
    .bind(&room.block)
    .bind(room.room_no)
    .bind(ROOM_CAPACITY)
    .execute(&mut **tx)
    .await
    .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to claim room", e))?;

    Ok(result.rows_affected() == 1)
}

async fn vacate_place(tx: &mut Transaction<'_, Sqlite>, room: &RoomKey) -> AppResult<()> {
    sqlx::query(
        "UPDATE rooms SET occupants = occupants - 1 \
         WHERE gender = ? AND block = ? AND room_no = ? AND occupants > 0",
    )
    .bind(room.gender)
    .bind(&room.block)
    .bind(room.room_no)
    .execute(&mut **tx)
    .await
    .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to vacate room", e))?;
    Ok(())
}

async fn find_holder(tx: &mut Transaction<'_, Sqlite>, holder: &str) -> AppResult<Option<i64>> {
    sqlx::query_scalar("SELECT id FROM bookings WHERE name = ?")
        .bind(holder)
        .fetch_optional(&mut **tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check holder", e))
}

/// Explain why a place could not be claimed in `room`.
async fn unavailable(tx: &mut Transaction<'_, Sqlite>, room: &RoomKey) -> AppResult<AppError> {
    let occupants: Option<i64> = sqlx::query_scalar(
        "SELECT occupants FROM rooms WHERE gender = ? AND block = ? AND room_no = ?",
    )
    .bind(room.gender)
    .bind(&room.block)
    .bind(room.room_no)
    .fetch_optional(&mut **tx)
    .await
    .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find room", e))?;

    Ok(match occupants {
        None => AppError::room_not_found(format!("Room {room} does not exist")),
        Some(_) => AppError::room_full(format!("Room {room} is full")),
    })
}

fn holder_conflict(err: sqlx::Error, holder: &str, context: &str) -> AppError {
    if is_unique_violation(&err, HOLDER_COLUMN) {
        AppError::already_booked(format!("'{holder}' already has a booking"))
    } else {
        AppError::with_source(ErrorKind::Database, context.to_string(), err)
    }
}

async fn commit(tx: Transaction<'_, Sqlite>) -> AppResult<()> {
    tx.commit()
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e))
}
