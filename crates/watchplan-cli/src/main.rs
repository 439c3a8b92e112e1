//! Watchplan CLI Application
//!
//! Command-line interface for building and following day-by-day watch plans.

mod args;
mod cli;
mod renderer;
mod source;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use watchplan_core::PlannerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        api_url,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let cli = Cli::new(planner, TerminalRenderer::new(!no_color), api_url);

    info!("Watchplan started");

    match command {
        Some(Plan { command }) => cli.handle_plan_command(command).await,
        Some(Day { command }) => cli.handle_day_command(command).await,
        Some(Progress(args)) => cli.show_progress(args).await,
        Some(Reset(args)) => cli.reset(args).await,
        None => cli.list_plans().await,
    }
}
