//! Data models for playlists, schedules and plans.
//!
//! This module contains the core domain models of the watch planner. Display
//! implementations for these models are located in [`crate::display::models`]
//! to keep data structures separate from presentation logic.
//!
//! All models serialize with camelCase field names (`planData`,
//! `dailyMinutes`, ...), the layout of documents already in storage.
//!
//! # Examples
//!
//! ```rust
//! use watchplan_core::models::{Plan, Playlist, Video};
//! use watchplan_core::scheduler::generate_day_wise_plan;
//! use std::num::NonZeroU32;
//!
//! let playlist = Playlist {
//!     id: Some("PL123".to_string()),
//!     title: "Rust in Depth".to_string(),
//!     video_count: 2,
//!     videos: vec![Video::new("Intro", 10), Video::new("Ownership", 10)],
//! };
//! let daily = NonZeroU32::new(15).unwrap();
//! let days = generate_day_wise_plan(&playlist.videos, daily);
//!
//! let mut plan = Plan::from_schedule("plan-1", &playlist, daily.get(), days);
//! plan.set_day_completion(0, true).unwrap();
//! assert_eq!(plan.progress().percent, 100);
//! ```

pub mod day;
mod minutes;
pub mod plan;
pub mod progress;
pub mod store;
pub mod summary;
pub mod video;


pub use day::{DaySchedule, PlannedVideoSlot};
pub use plan::{Plan, PlanCursor};
pub use progress::{compute_progress, Progress};
pub use store::{LegacyPlanData, PlanStore};
pub use summary::PlanSummary;
pub use video::{Playlist, Video};
