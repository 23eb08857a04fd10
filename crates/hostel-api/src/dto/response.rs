//! Response DTOs.

use serde::{Deserialize, Serialize};

use hostel_entity::booking::Booking;
use hostel_entity::room::{OccupancyState, OccupancySummary};

/// `{status, message}` acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// `"success"`.
    pub status: String,
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// A success acknowledgement.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }
}

/// Result of signup or login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// `"success"`.
    pub status: String,
    /// Page the client should navigate to next.
    pub redirect: String,
    /// Session token; also set as a cookie.
    pub token: String,
}

/// Body of `GET /api/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingStatusResponse {
    /// `"approved"` when the caller holds a booking, else `"rejected"`.
    pub status: String,
    /// The caller's booking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking: Option<Booking>,
}

impl From<Option<Booking>> for BookingStatusResponse {
    fn from(booking: Option<Booking>) -> Self {
        let status = if booking.is_some() {
            "approved"
        } else {
            "rejected"
        };
        Self {
            status: status.to_string(),
            booking,
        }
    }
}

/// Hostel-wide occupancy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupancyResponse {
    /// `Full` or `Vacant`.
    pub status: OccupancyState,
    /// Room count times capacity.
    pub total_capacity: i64,
    /// Sum of occupants.
    pub total_occupied: i64,
}

impl From<OccupancySummary> for OccupancyResponse {
    fn from(summary: OccupancySummary) -> Self {
        Self {
            status: summary.state(),
            total_capacity: summary.total_capacity,
            total_occupied: summary.total_occupied,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Database status.
    pub database: String,
    /// Version.
    pub version: String,
}
