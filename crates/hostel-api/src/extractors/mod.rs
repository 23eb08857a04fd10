//! Custom Axum extractors.

pub mod auth;
pub mod body;
pub mod path;

pub use auth::AuthUser;
pub use body::{ApiForm, ApiJson, ApiQuery};
pub use path::parse_booking_id;
