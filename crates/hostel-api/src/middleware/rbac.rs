//! Route guard for the admin-only endpoints.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use hostel_core::error::AppError;

use crate::error::ApiError;
use crate::extractors::AuthUser;

/// Rejects requests without a session (401) or without the admin role (403).
///
/// On success the resolved `AuthUser` is stored in the request extensions,
/// so the handler's own `AuthUser` extraction does not validate the token again.
pub async fn require_admin(
    auth: AuthUser,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !auth.is_admin() {
        return Err(AppError::authorization("Admin access required").into());
    }
    request.extensions_mut().insert(auth);
    Ok(next.run(request).await)
}
