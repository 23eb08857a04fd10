//! # hostel-api
//!
//! HTTP API layer for the hostel booking service built on Axum.
//!
//! Provides the JSON and redirect endpoints, middleware (admin guard,
//! CORS, request logging), extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{bootstrap, build_app, run_server};
pub use state::AppState;
