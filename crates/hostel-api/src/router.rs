//! Route definitions for the hostel booking HTTP API.
//!
//! Routes are grouped by who may call them. The admin group sits behind the
//! `require_admin` route layer, and the services check the role again.

use std::time::Duration;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use axum::http::StatusCode;
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use hostel_core::error::AppError;

use crate::error::ApiError;
use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    Router::new()
        .merge(public_routes())
        .merge(session_routes())
        .merge(admin_routes(state.clone()))
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Endpoints that need no session.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/rooms", get(handlers::rooms::list_rooms))
        .route("/api/book", post(handlers::booking::book))
        .route("/api/occupancy", get(handlers::rooms::occupancy))
        .route("/api/health", get(handlers::health::health))
        .route("/signup", post(handlers::auth::signup))
        .route("/login", post(handlers::auth::login))
}

/// Endpoints for any logged-in user.
fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/api/status", get(handlers::booking::status))
        .route("/logout", get(handlers::auth::logout))
}

/// Admin-only endpoints.
fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/bookings", get(handlers::booking::list_bookings))
        .route("/edit/{id}", get(handlers::booking::get_booking))
        .route("/update/{id}", post(handlers::booking::update_booking))
        .route("/delete/{id}", get(handlers::booking::delete_booking))
        .route("/admin/clear_bookings", post(handlers::booking::clear_bookings))
        .route("/admin/overview", get(handlers::admin::overview))
        .route("/users", get(handlers::admin::list_users))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::rbac::require_admin,
        ))
}

async fn not_found() -> ApiError {
    AppError::not_found("No such route").into()
}
