//! Booking handlers: book, check status, and the admin ledger views.

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Json;

use hostel_entity::booking::{Booking, UpdateBooking};

use crate::dto::request::{BookRequest, UpdateBookingForm};
use crate::dto::response::{BookingStatusResponse, MessageResponse};
use crate::dto::validate;
use crate::error::ApiError;
use crate::extractors::{ApiForm, ApiJson, AuthUser, parse_booking_id};
use crate::state::AppState;

/// Where the admin pages return after a change.
const BOOKINGS_PAGE: &str = "/bookings";

/// POST /api/book
pub async fn book(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<BookRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate(&req)?;
    let room = req.room()?;
    let booking = state.allocation_service.allocate(&req.name, &room).await?;

    Ok(Json(MessageResponse::success(format!(
        "Room {} in block {} booked for {}",
        booking.room_no, booking.block, booking.name
    ))))
}

/// GET /api/status
pub async fn status(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<BookingStatusResponse>, ApiError> {
    let booking = state.allocation_service.booking_for(&auth).await?;
    Ok(Json(booking.into()))
}

/// GET /bookings
pub async fn list_bookings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Booking>>, ApiError> {
    let bookings = state.allocation_service.list_bookings(&auth).await?;
    Ok(Json(bookings))
}

/// GET /edit/{id}
pub async fn get_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Booking>, ApiError> {
    let id = parse_booking_id(&id)?;
    let booking = state.allocation_service.get_booking(&auth, id).await?;
    Ok(Json(booking))
}

/// POST /update/{id}
pub async fn update_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ApiForm(form): ApiForm<UpdateBookingForm>,
) -> Result<Redirect, ApiError> {
    let id = parse_booking_id(&id)?;
    validate(&form)?;
    let update = UpdateBooking::try_from(form)?;
    state.allocation_service.edit(&auth, id, update).await?;
    Ok(Redirect::to(BOOKINGS_PAGE))
}

/// GET /delete/{id}
pub async fn delete_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Redirect, ApiError> {
    let id = parse_booking_id(&id)?;
    state.allocation_service.release(&auth, id).await?;
    Ok(Redirect::to(BOOKINGS_PAGE))
}

/// POST /admin/clear_bookings
pub async fn clear_bookings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = state.allocation_service.reset_all(&auth).await?;
    Ok(Json(MessageResponse::success(format!(
        "Cleared {removed} bookings"
    ))))
}
