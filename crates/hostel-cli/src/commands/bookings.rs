//! Booking ledger commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use hostel_core::error::AppError;
use hostel_core::types::BookingId;
use hostel_database::repositories::BookingRepository;
use hostel_entity::booking::Booking;

/// Arguments for booking commands
#[derive(Debug, Args)]
pub struct BookingsArgs {
    /// Booking subcommand
    #[command(subcommand)]
    pub command: BookingsCommand,
}

/// Booking subcommands
#[derive(Debug, Subcommand)]
pub enum BookingsCommand {
    /// List all bookings
    List,
    /// Delete one booking and free its place
    Delete {
        /// Booking ID
        id: BookingId,
    },
    /// Delete every booking and empty every room
    Reset {
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct BookingRow {
    id: i64,
    name: String,
    gender: String,
    block: String,
    room_no: i64,
    created_at: String,
}

impl From<&Booking> for BookingRow {
    fn from(b: &Booking) -> Self {
        Self {
            id: b.id.0,
            name: b.name.clone(),
            gender: b.gender.to_string(),
            block: b.block.clone(),
            room_no: b.room_no,
            created_at: b.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute booking commands
pub async fn execute(
    args: &BookingsArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let db = super::connect(&config).await?;
    let bookings = BookingRepository::new(db.pool().clone());

    match &args.command {
        BookingsCommand::List => {
            let rows: Vec<BookingRow> =
                bookings.list_all().await?.iter().map(BookingRow::from).collect();
            output::print_list(&rows, format);
        }
        BookingsCommand::Delete { id } => match bookings.release(*id).await? {
            Some(booking) => output::print_success(&format!(
                "Booking {} for '{}' deleted, {} freed.",
                booking.id,
                booking.name,
                booking.room_key()
            )),
            None => println!("No booking with id {id}."),
        },
        BookingsCommand::Reset { force } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt("This deletes ALL bookings and empties every room. Continue?")
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

                if !confirm {
                    println!("Cancelled.");
                    db.close().await;
                    return Ok(());
                }
            }

            let removed = bookings.reset_all().await?;
            output::print_success(&format!("{removed} bookings deleted, all rooms empty."));
        }
    }

    db.close().await;
    Ok(())
}
