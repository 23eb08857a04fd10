//! Per-request access log.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{debug, info, warn};

/// Logs method, path, status, and duration of every request.
///
/// Server errors log at `warn`, client errors (rejected bookings, bad
/// credentials) at `info`, and successful requests at `debug`.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let duration_ms = start.elapsed().as_millis() as u64;

    match response.status() {
        s if s.is_server_error() => {
            warn!(%method, %path, status, duration_ms, "HTTP request failed");
        }
        s if s.is_client_error() => {
            info!(%method, %path, status, duration_ms, "HTTP request rejected");
        }
        _ => {
            debug!(%method, %path, status, duration_ms, "HTTP request");
        }
    }

    response
}
