//! Request and response DTOs.

pub mod request;
pub mod response;

use validator::Validate;

use hostel_core::error::AppError;

/// Runs `validator` rules, mapping failures to a `Validation` error.
pub fn validate<T: Validate>(req: &T) -> Result<(), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid request: {e}")))
}
