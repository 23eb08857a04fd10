//! Allocation service: books, moves, and releases places in rooms.

use std::sync::Arc;

use tracing::{info, warn};

use hostel_auth::rbac::RbacEnforcer;
use hostel_core::error::AppError;
use hostel_core::types::BookingId;
use hostel_database::repositories::BookingRepository;
use hostel_entity::booking::{Booking, UpdateBooking};
use hostel_entity::room::RoomKey;

use crate::context::RequestContext;

use super::locks::RoomLocks;

/// Enforces one booking per holder and the per-room capacity.
///
/// Every mutation takes the room locks it needs before touching the
/// database, then runs as one transaction in the booking repository.
#[derive(Debug, Clone)]
pub struct AllocationService {
    /// Booking ledger.
    booking_repo: Arc<BookingRepository>,
    /// Per-room critical sections.
    locks: RoomLocks,
    /// Role checks.
    rbac: Arc<RbacEnforcer>,
}

impl AllocationService {
    /// Creates a new allocation service.
    pub fn new(
        booking_repo: Arc<BookingRepository>,
        locks: RoomLocks,
        rbac: Arc<RbacEnforcer>,
    ) -> Self {
        Self {
            booking_repo,
            locks,
            rbac,
        }
    }

    /// Books one place in `room` for `holder`.
    pub async fn allocate(&self, holder: &str, room: &RoomKey) -> Result<Booking, AppError> {
        let holder = holder.trim();
        if holder.is_empty() {
            return Err(AppError::validation("Holder name is required"));
        }

        let _guard = self.locks.lock(room).await;
        match self.booking_repo.allocate(holder, room).await {
            Ok(booking) => {
                info!(booking_id = %booking.id, holder = %holder, room = %room, "Room booked");
                Ok(booking)
            }
            Err(e) => {
                if e.kind.is_rejection() {
                    info!(holder = %holder, room = %room, reason = %e.kind, "Booking rejected");
                } else {
                    warn!(holder = %holder, room = %room, error = %e, "Booking failed");
                }
                Err(e)
            }
        }
    }

    /// Deletes a booking and frees its place (admin).
    ///
    /// Returns `None` when the id does not exist; nothing changes then.
    pub async fn release(
        &self,
        ctx: &RequestContext,
        id: BookingId,
    ) -> Result<Option<Booking>, AppError> {
        self.rbac.require_admin(&ctx.role)?;

        let Some(existing) = self.booking_repo.find_by_id(id).await? else {
            info!(booking_id = %id, "Release of unknown booking ignored");
            return Ok(None);
        };

        let _guard = self.locks.lock(&existing.room_key()).await;
        let released = self.booking_repo.release(id).await?;
        if let Some(booking) = &released {
            info!(
                booking_id = %booking.id,
                holder = %booking.name,
                room = %booking.room_key(),
                admin = %ctx.username,
                "Booking released"
            );
        }
        Ok(released)
    }

    /// Overwrites a booking's holder and room, moving its place (admin).
    pub async fn edit(
        &self,
        ctx: &RequestContext,
        id: BookingId,
        update: UpdateBooking,
    ) -> Result<Booking, AppError> {
        self.rbac.require_admin(&ctx.role)?;

        let update = UpdateBooking {
            name: update.name.trim().to_string(),
            room: update.room,
        };
        if update.name.is_empty() {
            return Err(AppError::validation("Holder name is required"));
        }

        let existing = self
            .booking_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))?;

        let _guard = self
            .locks
            .lock_many([existing.room_key(), update.room.clone()])
            .await;
        let booking = self.booking_repo.reassign(id, &update).await?;

        info!(
            booking_id = %id,
            from = %existing.room_key(),
            to = %booking.room_key(),
            holder = %booking.name,
            admin = %ctx.username,
            "Booking edited"
        );
        Ok(booking)
    }

    /// Deletes every booking and empties every room (admin).
    ///
    /// Returns the number of bookings removed.
    pub async fn reset_all(&self, ctx: &RequestContext) -> Result<u64, AppError> {
        self.rbac.require_admin(&ctx.role)?;

        let removed = self.booking_repo.reset_all().await?;
        warn!(removed, admin = %ctx.username, "All bookings cleared");
        Ok(removed)
    }

    /// Fetches one booking (admin).
    pub async fn get_booking(
        &self,
        ctx: &RequestContext,
        id: BookingId,
    ) -> Result<Booking, AppError> {
        self.rbac.require_admin(&ctx.role)?;

        self.booking_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))
    }

    /// Lists all bookings ordered by id (admin).
    pub async fn list_bookings(&self, ctx: &RequestContext) -> Result<Vec<Booking>, AppError> {
        self.rbac.require_admin(&ctx.role)?;
        self.booking_repo.list_all().await
    }

    /// The caller's own booking, if any.
    pub async fn booking_for(&self, ctx: &RequestContext) -> Result<Option<Booking>, AppError> {
        self.booking_repo.find_by_name(&ctx.username).await
    }
}
