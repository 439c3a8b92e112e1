//! Core library for turning a video playlist into a day-by-day watch plan.
//!
//! The crate has a small pure core and a thin persistence layer around it:
//!
//! - [`scheduler`]: greedy partitioning of a playlist into days of a fixed
//!   minute budget, splitting videos across day boundaries
//! - [`reconcile`]: resolution of the active plan across the plans store and
//!   the legacy single-plan slot
//! - [`models`]: plans, days, slots and derived progress
//! - [`planner`]: async, transactional storage operations
//! - [`session`]: the selection state a front end drives
//! - [`playlist`]: playlist sources and URL parsing
//! - [`display`]: markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use watchplan_core::{
//!     playlist::JsonFileSource, session::Session, params::validate_daily_minutes,
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("watchplan.db"))
//!     .build()
//!     .await?;
//!
//! let mut session = Session::restore(&planner).await?;
//! session.begin_new_plan();
//! session
//!     .load_playlist(&JsonFileSource::new("playlist.json"), "PL1234")
//!     .await?;
//! let plan = session
//!     .commit_new_plan(&planner, validate_daily_minutes(45)?)
//!     .await?;
//! println!("{plan}");
//!
//! for summary in &planner.list_plans_summary().await? {
//!     println!("{}: {}%", summary.title, summary.progress.percent);
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod handlers;
pub mod models;
pub mod params;
pub mod planner;
pub mod playlist;
pub mod reconcile;
pub mod scheduler;
pub mod session;

// Re-export commonly used types
pub use db::Database;
pub use display::{CreateResult, OperationStatus, PlanSummaries, UpdateResult};
pub use error::{Result, WatchPlanError};
pub use models::{
    compute_progress, DaySchedule, LegacyPlanData, Plan, PlanStore, PlanSummary,
    PlannedVideoSlot, Playlist, Progress, Video,
};
pub use planner::{Planner, PlannerBuilder};
pub use reconcile::{Reconciliation, LEGACY_PLAN_ID};
pub use scheduler::generate_day_wise_plan;
pub use session::{Selection, Session};
