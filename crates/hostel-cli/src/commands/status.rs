//! Hostel-wide occupancy at a glance.

use serde::Serialize;

use crate::output::{self, OutputFormat};
use hostel_core::error::AppError;
use hostel_database::repositories::{RoomRepository, UserRepository};
use hostel_entity::room::OccupancyState;

#[derive(Debug, Serialize)]
struct StatusView {
    status: OccupancyState,
    total_capacity: i64,
    total_occupied: i64,
    users: i64,
}

/// Execute the status command
pub async fn execute(config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let db = super::connect(&config).await?;

    let summary = RoomRepository::new(db.pool().clone()).summary().await?;
    let users = UserRepository::new(db.pool().clone()).count().await?;

    output::print_item(
        &StatusView {
            status: summary.state(),
            total_capacity: summary.total_capacity,
            total_occupied: summary.total_occupied,
            users,
        },
        format,
    );

    db.close().await;
    Ok(())
}
