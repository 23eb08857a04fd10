//! Prepare a fresh database: schema, room grid, admin account.

use hostel_api::AppState;
use hostel_core::error::AppError;

use crate::output;

/// Execute the seed command. Safe to run repeatedly.
pub async fn execute(config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let db = super::connect(&config).await?;

    let state = AppState::new(config, db.pool().clone());
    hostel_api::bootstrap(&state).await?;

    let rooms = state.inventory_service.list_all().await?;
    output::print_success(&format!(
        "{} rooms ready, admin account '{}' present.",
        rooms.len(),
        state.config.auth.admin_username
    ));

    db.close().await;
    Ok(())
}
