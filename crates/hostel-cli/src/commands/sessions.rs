//! Session maintenance commands.

use std::sync::Arc;

use clap::{Args, Subcommand};

use crate::output;
use hostel_auth::session::SessionCleanup;
use hostel_core::error::AppError;
use hostel_database::repositories::SessionRepository;

/// Arguments for session commands
#[derive(Debug, Args)]
pub struct SessionsArgs {
    /// Session subcommand
    #[command(subcommand)]
    pub command: SessionsCommand,
}

/// Session subcommands
#[derive(Debug, Subcommand)]
pub enum SessionsCommand {
    /// Delete expired and logged-out sessions
    Purge,
}

/// Execute session commands
pub async fn execute(args: &SessionsArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let db = super::connect(&config).await?;

    match &args.command {
        SessionsCommand::Purge => {
            let repo = Arc::new(SessionRepository::new(db.pool().clone()));
            let removed = SessionCleanup::new(repo).run_cleanup().await?;
            output::print_success(&format!("{removed} sessions removed."));
        }
    }

    db.close().await;
    Ok(())
}
