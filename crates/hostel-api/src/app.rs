//! Application builder: wires state, bootstraps the database, and serves.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tracing::{info, warn};

use hostel_auth::session::SessionCleanup;
use hostel_core::config::AppConfig;
use hostel_core::error::AppError;
use hostel_database::DatabasePool;
use hostel_database::migration::run_migrations;

use crate::router::build_router;
use crate::state::AppState;

/// How often expired sessions are purged.
const SESSION_CLEANUP_INTERVAL: Duration = Duration::from_secs(15 * 60);

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Prepares the database for serving: migrations, room grid, admin account.
pub async fn bootstrap(state: &AppState) -> Result<(), AppError> {
    run_migrations(&state.db_pool).await?;

    let created = state.inventory_service.seed(&state.config.inventory).await?;
    info!(created, "Room inventory ready");

    state
        .session_manager
        .ensure_admin(&state.config.auth)
        .await?;
    Ok(())
}

/// Runs the server until a shutdown signal, then closes the pool.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> Result<(), AppError> {
    info!("Starting hostel booking server v{}", env!("CARGO_PKG_VERSION"));

    let addr = config.server.bind_address();
    let state = AppState::new(config, db.pool().clone());
    bootstrap(&state).await?;

    let cleanup = SessionCleanup::new(Arc::clone(&state.session_repo))
        .spawn(SESSION_CLEANUP_INTERVAL);

    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("Hostel booking server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    cleanup.abort();
    db.close().await;
    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
