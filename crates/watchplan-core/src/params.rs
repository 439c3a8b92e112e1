//! Parameter structures for watch planner operations.
//!
//! These structures are shared by every interface (the CLI today) and carry no
//! framework-specific derives. Interface layers define their own argument
//! types and convert into these with `From` implementations, keeping argument
//! parsing concerns out of the core.
//!
//! Raw user input is validated here, before it reaches the scheduler or the
//! store: see [`validate_daily_minutes`].

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, WatchPlanError},
    models::{DaySchedule, Playlist},
};

/// Generic parameters for operations requiring just a plan ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the plan to operate on
    pub id: String,
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

/// Parameters for saving a generated schedule as a new plan.
#[derive(Debug, Clone)]
pub struct CreatePlan {
    /// Playlist the schedule was generated from
    pub playlist: Playlist,
    /// Daily budget the schedule was generated with
    pub daily_minutes: NonZeroU32,
    /// The generated schedule
    pub days: Vec<DaySchedule>,
}

/// Parameters for marking a day as watched or unwatched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetDayCompletion {
    /// Plan owning the day
    pub plan_id: String,
    /// 0-based index into the plan's schedule
    pub day_index: usize,
    /// New completion flag
    pub completed: bool,
}

/// Parameters for generating a schedule from a playlist reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePlan {
    /// Playlist URL or bare playlist ID
    pub playlist: String,
    /// Daily budget as entered by the user
    pub daily_minutes: i64,
}

/// Parameters for clearing all stored data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Reset {
    /// Must be true; guards against accidental resets
    pub confirmed: bool,
}

/// Validates a user-entered daily budget.
///
/// # Errors
///
/// Returns `WatchPlanError::InvalidInput` for zero, negative or oversized
/// values.
///
/// # Examples
///
/// ```rust
/// use watchplan_core::params::validate_daily_minutes;
///
/// assert_eq!(validate_daily_minutes(45).unwrap().get(), 45);
/// assert!(validate_daily_minutes(0).is_err());
/// assert!(validate_daily_minutes(-5).is_err());
/// ```
pub fn validate_daily_minutes(raw: i64) -> Result<NonZeroU32> {
    u32::try_from(raw)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(|| {
            WatchPlanError::invalid_input("daily_minutes")
                .with_reason(format!("must be a positive number of minutes, got {raw}"))
        })
}
