//! Expired session cleanup.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;
use tracing::{error, info};

use hostel_core::error::AppError;
use hostel_database::repositories::SessionRepository;

/// Deletes session rows that can no longer authenticate anything.
#[derive(Debug, Clone)]
pub struct SessionCleanup {
    /// Session repository.
    sessions: Arc<SessionRepository>,
}

impl SessionCleanup {
    /// Creates a new session cleanup handler.
    pub fn new(sessions: Arc<SessionRepository>) -> Self {
        Self { sessions }
    }

    /// Runs one cleanup cycle. Returns the number of sessions removed.
    pub async fn run_cleanup(&self) -> Result<u64, AppError> {
        let removed = self.sessions.cleanup_expired(Utc::now()).await?;
        if removed > 0 {
            info!(removed, "Session cleanup completed");
        }
        Ok(removed)
    }

    /// Runs a cleanup cycle every `interval` on a background task.
    pub fn spawn(self, interval: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                if let Err(e) = self.run_cleanup().await {
                    error!(error = %e, "Session cleanup failed");
                }
            }
        })
    }
}
