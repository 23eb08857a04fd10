//! Typed path parameter helpers.

use hostel_core::error::AppError;
use hostel_core::types::BookingId;

/// Parses a booking id from a path segment.
pub fn parse_booking_id(s: &str) -> Result<BookingId, AppError> {
    s.parse::<BookingId>()
        .map_err(|_| AppError::validation(format!("Invalid booking id: {s}")))
}
