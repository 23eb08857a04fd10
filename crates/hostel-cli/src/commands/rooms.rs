//! Room inventory commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use hostel_core::error::AppError;
use hostel_database::repositories::RoomRepository;
use hostel_entity::room::{Gender, Room};

/// Arguments for room commands
#[derive(Debug, Args)]
pub struct RoomsArgs {
    /// Room subcommand
    #[command(subcommand)]
    pub command: RoomsCommand,
}

/// Room subcommands
#[derive(Debug, Subcommand)]
pub enum RoomsCommand {
    /// List rooms with their occupancy
    List {
        /// Only rooms of this gender (male/female, boys/girls)
        #[arg(short, long)]
        gender: Option<String>,
        /// Only rooms in this block
        #[arg(short, long)]
        block: Option<String>,
        /// Hide rooms with no free place
        #[arg(long)]
        vacant: bool,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct RoomRow {
    gender: String,
    block: String,
    room_no: i64,
    occupants: i64,
    free: i64,
}

impl From<&Room> for RoomRow {
    fn from(room: &Room) -> Self {
        Self {
            gender: room.gender.to_string(),
            block: room.block.clone(),
            room_no: room.room_no,
            occupants: room.occupants,
            free: room.vacancies(),
        }
    }
}

/// Execute room commands
pub async fn execute(
    args: &RoomsArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let db = super::connect(&config).await?;
    let rooms = RoomRepository::new(db.pool().clone());

    match &args.command {
        RoomsCommand::List {
            gender,
            block,
            vacant,
        } => {
            let gender: Option<Gender> = gender.as_deref().map(str::parse).transpose()?;
            let block = block.as_deref().map(|b| b.trim().to_uppercase());

            let rows: Vec<RoomRow> = rooms
                .list_all()
                .await?
                .iter()
                .filter(|r| gender.is_none_or(|g| r.gender == g))
                .filter(|r| block.as_deref().is_none_or(|b| r.block == b))
                .filter(|r| !vacant || r.has_vacancy())
                .map(RoomRow::from)
                .collect();

            output::print_list(&rows, format);
        }
    }

    db.close().await;
    Ok(())
}
