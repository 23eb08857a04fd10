//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use hostel_core::error::AppError;
use hostel_entity::booking::UpdateBooking;
use hostel_entity::room::RoomKey;
use hostel_entity::user::UserRole;

/// Body of `POST /api/book`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookRequest {
    /// Holder identity.
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    /// `male`/`female` or `boys`/`girls`.
    pub gender: String,
    /// Block letter.
    #[validate(length(min = 1, max = 1, message = "Block must be a single letter"))]
    pub block: String,
    /// Room number within the block.
    #[validate(range(min = 1, message = "Room number must be positive"))]
    pub room_no: i64,
}

impl BookRequest {
    /// The room this request targets.
    pub fn room(&self) -> Result<RoomKey, AppError> {
        RoomKey::parse(&self.gender, &self.block, self.room_no)
    }
}

/// Form fields of `POST /update/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateBookingForm {
    /// New holder identity.
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    /// New gender.
    pub gender: String,
    /// New block.
    #[validate(length(min = 1, max = 1, message = "Block must be a single letter"))]
    pub block: String,
    /// New room number.
    #[validate(range(min = 1, message = "Room number must be positive"))]
    pub room_no: i64,
}

impl TryFrom<UpdateBookingForm> for UpdateBooking {
    type Error = AppError;

    fn try_from(form: UpdateBookingForm) -> Result<Self, Self::Error> {
        let room = RoomKey::parse(&form.gender, &form.block, form.room_no)?;
        Ok(UpdateBooking {
            name: form.name,
            room,
        })
    }
}

/// Query string of `GET /api/rooms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomsQuery {
    /// Gender partition.
    pub gender: String,
    /// Block letter.
    pub block: String,
}

/// Body of `POST /signup`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Desired username.
    #[validate(length(min = 1, max = 100, message = "Username is required"))]
    pub username: String,
    /// Contact email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Role the login form was submitted for, if any.
    #[serde(default)]
    pub role: Option<UserRole>,
}
