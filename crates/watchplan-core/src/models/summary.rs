//! Plan summary types for listings.

use serde::{Deserialize, Serialize};

use super::{Plan, Progress};

/// Listing entry for a plan with its derived progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    /// Plan ID
    pub id: String,
    /// Title of the plan
    pub title: String,
    /// Number of days in the schedule
    pub total_days: u32,
    /// Daily budget in minutes
    pub daily_minutes: u32,
    /// Progress computed at listing time
    pub progress: Progress,
    /// Whether this is the active plan
    pub active: bool,
}

impl PlanSummary {
    /// Create a summary of `plan`, flagged active when it matches
    /// `active_plan_id`.
    pub fn from_plan(plan: &Plan, active_plan_id: Option<&str>) -> Self {
        Self {
            id: plan.id.clone(),
            title: plan.title.clone(),
            total_days: plan.total_days,
            daily_minutes: plan.daily_minutes,
            progress: plan.progress(),
            active: active_plan_id == Some(plan.id.as_str()),
        }
    }
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        Self::from_plan(plan, None)
    }
}
