use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{DayCommands, PlanCommands, ProgressArgs, ResetArgs};

/// Turn a video playlist into a day-by-day watch plan
///
/// Watchplan splits a playlist into days that fit a daily time budget,
/// splitting long videos across days, and keeps track of which days have
/// been watched. Several plans can be kept side by side; one of them is
/// active at a time.
#[derive(Parser)]
#[command(version, about, name = "wp")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/watchplan/watchplan.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Base URL of the playlist service; playlists are fetched from
    /// <URL>/<PLAYLIST_ID>
    #[arg(long, global = true, env = "WATCHPLAN_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Watchplan CLI
///
/// Running `wp` without a command lists all plans.
#[derive(Subcommand)]
pub enum Commands {
    /// Create, inspect and switch plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Mark days of a plan as watched or unwatched
    #[command(alias = "d")]
    Day {
        #[command(subcommand)]
        command: DayCommands,
    },
    /// Show how far along a plan is
    Progress(ProgressArgs),
    /// Delete every plan and the active selection
    Reset(ResetArgs),
}
