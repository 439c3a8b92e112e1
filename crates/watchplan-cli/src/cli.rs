//! Command definitions and their handlers.
//!
//! Argument structures carry the clap derives and convert into the core
//! parameter types with `From`, so the core stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner / Session
//! ```
//!
//! Day numbers are 1-based on the command line and 0-based in the core.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use log::debug;
use watchplan_core::{
    display::{CreateResult, OperationStatus, ProgressBar, UpdateResult},
    handlers::preview_plan,
    params::{validate_daily_minutes, GeneratePlan, Id, Reset, SetDayCompletion},
    Planner, Session,
};

use crate::{renderer::TerminalRenderer, source::Source};

/// Show a plan with its full schedule
#[derive(Args)]
pub struct ShowPlanArgs {
    /// ID of the plan to show; defaults to the active plan
    pub id: Option<String>,
}

impl From<ShowPlanArgs> for Option<Id> {
    fn from(val: ShowPlanArgs) -> Self {
        val.id.map(|id| Id { id })
    }
}

/// Make a plan the active one
#[derive(Args)]
pub struct UsePlanArgs {
    /// ID of the plan to activate
    pub id: String,
}

impl From<UsePlanArgs> for Id {
    fn from(val: UsePlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Fetch a playlist and schedule it
///
/// Shared by `create`, which saves and activates the result, and `preview`,
/// which only prints it.
#[derive(Args)]
pub struct SchedulePlaylistArgs {
    /// Playlist URL (https://www.youtube.com/playlist?list=...) or bare ID
    pub playlist: String,

    /// Minutes available for watching each day
    #[arg(short = 'm', long, allow_negative_numbers = true)]
    pub daily_minutes: i64,

    /// Read the playlist from an exported JSON file, or a directory of
    /// `<PLAYLIST_ID>.json` files, instead of the playlist service
    #[arg(short, long)]
    pub from_file: Option<PathBuf>,
}

impl From<&SchedulePlaylistArgs> for GeneratePlan {
    fn from(val: &SchedulePlaylistArgs) -> Self {
        GeneratePlan {
            playlist: val.playlist.clone(),
            daily_minutes: val.daily_minutes,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// List all plans with their progress
    #[command(alias = "ls")]
    List,
    /// Show a plan with its full schedule
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Make a plan the active one
    #[command(alias = "u")]
    Use(UsePlanArgs),
    /// Fetch a playlist, save its schedule as a new plan and activate it
    #[command(alias = "c")]
    Create(SchedulePlaylistArgs),
    /// Fetch a playlist and print its schedule without saving it
    Preview(SchedulePlaylistArgs),
}

/// Select one day of a plan
#[derive(Args)]
pub struct DayArgs {
    /// Day number, starting at 1
    pub day: usize,

    /// ID of the plan; defaults to the active plan
    #[arg(short, long)]
    pub plan: Option<String>,
}

#[derive(Subcommand)]
pub enum DayCommands {
    /// Mark a day as watched
    Done(DayArgs),
    /// Mark a day as not watched
    Undo(DayArgs),
}

/// Show how far along a plan is
#[derive(Args)]
pub struct ProgressArgs {
    /// ID of the plan; defaults to the active plan
    pub id: Option<String>,
}

impl From<ProgressArgs> for Option<Id> {
    fn from(val: ProgressArgs) -> Self {
        val.id.map(|id| Id { id })
    }
}

/// Delete every plan and the active selection
#[derive(Args)]
pub struct ResetArgs {
    /// Confirm that all plans should be deleted
    #[arg(long)]
    pub confirm: bool,
}

impl From<ResetArgs> for Reset {
    fn from(val: ResetArgs) -> Self {
        Reset {
            confirmed: val.confirm,
        }
    }
}

/// Runs commands against a planner and renders their output.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
    api_url: Option<String>,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer, api_url: Option<String>) -> Self {
        Self {
            planner,
            renderer,
            api_url,
        }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::List => self.list_plans().await,
            PlanCommands::Show(args) => self.show_plan(args.into()).await,
            PlanCommands::Use(args) => self.use_plan(args.into()).await,
            PlanCommands::Create(args) => self.create_plan(args).await,
            PlanCommands::Preview(args) => self.preview_plan(&args).await,
        }
    }

    pub async fn handle_day_command(&self, command: DayCommands) -> Result<()> {
        match command {
            DayCommands::Done(args) => self.set_day(args, true).await,
            DayCommands::Undo(args) => self.set_day(args, false).await,
        }
    }

    pub async fn list_plans(&self) -> Result<()> {
        let plans = self
            .planner
            .list_plans_summary()
            .await
            .context("Failed to list plans")?;
        self.renderer.render(&plans)
    }

    async fn show_plan(&self, id: Option<Id>) -> Result<()> {
        match self.planner.show_plan(id.as_ref()).await? {
            Some(plan) => self.renderer.render(&plan),
            None => self.renderer.render(&OperationStatus::notice(
                "No active plan. Create one with `wp plan create`.",
            )),
        }
    }

    async fn use_plan(&self, id: Id) -> Result<()> {
        let mut session = Session::restore(&self.planner).await?;
        session.select(&self.planner, &id).await?;
        self.renderer.render(&OperationStatus::success(format!(
            "Active plan set to {}",
            id.id
        )))
    }

    async fn create_plan(&self, args: SchedulePlaylistArgs) -> Result<()> {
        // Validate the budget before anything is fetched
        let daily_minutes = validate_daily_minutes(args.daily_minutes)?;
        let source = Source::select(args.from_file, self.api_url.as_deref())?;

        let mut session = Session::restore(&self.planner).await?;
        session.begin_new_plan();
        session
            .load_playlist(&source, &args.playlist)
            .await
            .context("Failed to fetch playlist")?;
        let plan = session.commit_new_plan(&self.planner, daily_minutes).await?;

        self.renderer.render(&CreateResult::new(plan))
    }

    async fn preview_plan(&self, args: &SchedulePlaylistArgs) -> Result<()> {
        let source = Source::select(args.from_file.clone(), self.api_url.as_deref())?;
        let preview = preview_plan(&source, &GeneratePlan::from(args)).await?;
        self.renderer.render(&preview)
    }

    async fn set_day(&self, args: DayArgs, completed: bool) -> Result<()> {
        let Some(day_index) = args.day.checked_sub(1) else {
            bail!("Day numbers start at 1");
        };
        let plan_id = match args.plan {
            Some(id) => id,
            None => self
                .planner
                .get_active_plan()
                .await?
                .map(|plan| plan.id)
                .context("No active plan. Pass --plan or activate one with `wp plan use`")?,
        };
        debug!("Setting day {} of {plan_id} to completed={completed}", args.day);

        let plan = self
            .planner
            .set_day_completion(&SetDayCompletion {
                plan_id,
                day_index,
                completed,
            })
            .await?;

        let change = if completed {
            format!("Day {} marked as watched", args.day)
        } else {
            format!("Day {} marked as not watched", args.day)
        };
        self.renderer
            .render(&UpdateResult::with_changes(plan, vec![change]))
    }

    pub async fn show_progress(&self, args: ProgressArgs) -> Result<()> {
        let id: Option<Id> = args.into();
        let (plan, progress) = self.planner.plan_progress(id.as_ref()).await?;
        let report = format!(
            "# {}\n\n- Progress: {progress}\n- {} {}%\n",
            plan.title,
            ProgressBar(progress.percent),
            progress.percent
        );
        self.renderer.render(&report)
    }

    pub async fn reset(&self, args: ResetArgs) -> Result<()> {
        self.planner.reset(&args.into()).await?;
        self.renderer
            .render(&OperationStatus::success("All plans deleted"))
    }
}
