//! CLI command definitions and dispatch.

pub mod bookings;
pub mod migrate;
pub mod rooms;
pub mod seed;
pub mod serve;
pub mod sessions;
pub mod status;
pub mod users;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use hostel_core::config::AppConfig;
use hostel_core::error::AppError;
use hostel_database::DatabasePool;

/// Hostel room booking: operator tools
#[derive(Debug, Parser)]
#[command(name = "hostel-cli", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Log at info level instead of warn (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the booking server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Create the room grid and the admin account
    Seed,
    /// Room inventory
    Rooms(rooms::RoomsArgs),
    /// Booking ledger
    Bookings(bookings::BookingsArgs),
    /// Registered accounts
    Users(users::UsersArgs),
    /// Login sessions
    Sessions(sessions::SessionsArgs),
    /// Aggregate occupancy
    Status,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate(args) => migrate::execute(args, &self.config, self.format).await,
            Commands::Seed => seed::execute(&self.config).await,
            Commands::Rooms(args) => rooms::execute(args, &self.config, self.format).await,
            Commands::Bookings(args) => bookings::execute(args, &self.config, self.format).await,
            Commands::Users(args) => users::execute(args, &self.config, self.format).await,
            Commands::Sessions(args) => sessions::execute(args, &self.config).await,
            Commands::Status => status::execute(&self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load_file(config_path)
}

/// Helper: connect to the configured database
pub async fn connect(config: &AppConfig) -> Result<DatabasePool, AppError> {
    DatabasePool::connect(&config.database).await
}
