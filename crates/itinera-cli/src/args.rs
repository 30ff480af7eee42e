use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ItemCommands, TripCommands};

/// Plan trips day by day from the terminal
///
/// Itinera keeps trips and their itineraries in a local SQLite database.
/// Each trip is split into calendar days; items can be added to a day,
/// edited, deleted and moved within or across days. Run without a command
/// to list trips.
#[derive(Parser)]
#[command(version, about, name = "itin")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/itinera/itinera.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Itinera CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage trips
    #[command(alias = "t")]
    Trip {
        #[command(subcommand)]
        command: TripCommands,
    },
    /// Manage itinerary items within a trip
    #[command(alias = "i")]
    Item {
        #[command(subcommand)]
        command: ItemCommands,
    },
}
