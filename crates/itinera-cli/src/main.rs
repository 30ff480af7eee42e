//! Itinera CLI application
//!
//! Command-line interface for planning trips day by day.

mod args;
mod cli;
mod commands;
mod renderer;

use Commands::*;
use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use commands::Cli;
use itinera_core::PlannerBuilder;
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    info!("Using database {}", planner.database_path().display());

    let cli = Cli::new(planner, TerminalRenderer::new(!no_color));
    match command {
        Some(Trip { command }) => cli.handle_trip_command(command).await,
        Some(Item { command }) => cli.handle_item_command(command).await,
        None => cli.list_trips().await,
    }
}
