//! High-level planner API for saving and tracking watch plans.
//!
//! The [`Planner`] coordinates the storage layer and the pure parts of the
//! crate (scheduler, reconciliation, progress). It owns no state beyond the
//! database location, so it can be shared freely.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (plan_handlers) │───▶│   (plan_ops)    │───▶│   (via db/)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   Reconciled reads      Transactional writes    Key-value storage
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`plan_ops`]: Plan creation, activation, day completion and reset
//! - [`plan_handlers`]: Active-plan resolution, lookups and listings
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::num::NonZeroU32;
//! use watchplan_core::{
//!     models::{Playlist, Video},
//!     params::{CreatePlan, Id, SetDayCompletion},
//!     scheduler::generate_day_wise_plan,
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new().build().await?;
//!
//! let playlist = Playlist {
//!     title: "Course".to_string(),
//!     video_count: 1,
//!     videos: vec![Video::new("Lecture 1", 50)],
//!     ..Default::default()
//! };
//! let daily = NonZeroU32::new(30).unwrap();
//! let days = generate_day_wise_plan(&playlist.videos, daily);
//!
//! let plan = planner
//!     .create_plan(&CreatePlan { playlist, daily_minutes: daily, days })
//!     .await?;
//! planner.set_active_plan(&Id { id: plan.id.clone() }).await?;
//! planner
//!     .set_day_completion(&SetDayCompletion { plan_id: plan.id, day_index: 0, completed: true })
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{Result, WatchPlanError},
};

pub mod builder;
pub mod plan_handlers;
pub mod plan_ops;


pub use builder::PlannerBuilder;

/// Main planner interface for managing watch plans.
pub struct Planner {
    pub(crate) db_path: PathBuf,
}

impl Planner {
    /// Creates a new planner with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Location of the backing database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `op` against a fresh connection on the blocking thread pool.
    pub(crate) async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(WatchPlanError::join)?
    }
}
