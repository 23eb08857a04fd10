//! Account listing commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use hostel_core::error::AppError;
use hostel_database::repositories::UserRepository;
use hostel_entity::user::UserRole;

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UsersArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UsersCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List registered accounts
    List {
        /// Filter by role (admin/user)
        #[arg(short, long)]
        role: Option<String>,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    username: String,
    email: String,
    role: String,
}

/// Execute user commands
pub async fn execute(
    args: &UsersArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let db = super::connect(&config).await?;
    let users = UserRepository::new(db.pool().clone());

    match &args.command {
        UsersCommand::List { role } => {
            let role: Option<UserRole> = role.as_deref().map(str::parse).transpose()?;

            let rows: Vec<UserRow> = users
                .list_summaries()
                .await?
                .into_iter()
                .filter(|u| role.is_none_or(|r| u.role == r))
                .map(|u| UserRow {
                    username: u.username,
                    email: u.email,
                    role: u.role.to_string(),
                })
                .collect();

            output::print_list(&rows, format);
        }
    }

    db.close().await;
    Ok(())
}
