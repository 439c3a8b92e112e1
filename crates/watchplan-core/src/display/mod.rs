//! Display formatting for plans, schedules and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! newtype wrappers format collections and operation outcomes. Everything
//! renders as markdown.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │ (Plan, Day...)  │───▶│ Format helpers  │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Plan listings and day-card lists
//! - [`results`]: Create/update results and schedule previews
//! - [`status`]: Success and failure lines
//! - [`duration`]: `H:MM` minute formatting and progress bars
//! - [`datetime`]: Local time formatting
//! - [`models`]: Display implementations for domain models
//!
//! # Examples
//!
//! ```rust
//! use watchplan_core::display::{format_minutes, OperationStatus};
//!
//! assert_eq!(format_minutes(90), "1:30");
//! let status = OperationStatus::success("Active plan set");
//! assert!(status.to_string().starts_with("Success:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod duration;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Days, PlanSummaries};
pub use datetime::LocalDateTime;
pub use duration::{format_minutes, ProgressBar};
pub use results::{CreateResult, UpdateResult};
pub use status::{OperationStatus, StatusKind};
