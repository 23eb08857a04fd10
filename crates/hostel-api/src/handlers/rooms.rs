//! Room inventory handlers.

use axum::Json;
use axum::extract::State;

use hostel_entity::room::RoomVacancy;

use crate::dto::request::RoomsQuery;
use crate::dto::response::OccupancyResponse;
use crate::error::ApiError;
use crate::extractors::ApiQuery;
use crate::state::AppState;

/// GET /api/rooms?gender=&block=
pub async fn list_rooms(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RoomsQuery>,
) -> Result<Json<Vec<RoomVacancy>>, ApiError> {
    let rooms = state
        .inventory_service
        .list_rooms(&query.gender, &query.block)
        .await?;
    Ok(Json(rooms))
}

/// GET /api/occupancy
pub async fn occupancy(
    State(state): State<AppState>,
) -> Result<Json<OccupancyResponse>, ApiError> {
    let summary = state.inventory_service.aggregate_status().await?;
    Ok(Json(summary.into()))
}
