//! Admin dashboard handlers.

use axum::Json;
use axum::extract::State;

use hostel_entity::user::UserSummary;
use hostel_service::user::AdminOverview;

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<UserSummary>>, ApiError> {
    let users = state.user_service.list_users(&auth).await?;
    Ok(Json(users))
}

/// GET /admin/overview
pub async fn overview(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<AdminOverview>, ApiError> {
    let overview = state.user_service.overview(&auth).await?;
    Ok(Json(overview))
}
