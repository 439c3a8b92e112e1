//! Persisted store shapes: the plans collection and the legacy single slot.

use serde::{Deserialize, Serialize};

use super::{DaySchedule, Plan, Playlist};

/// The plans collection with its active-plan pointer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlanStore {
    /// ID of the plan currently displayed, if any
    #[serde(default)]
    pub active_plan_id: Option<String>,

    /// Saved plans, unique by ID, in creation order
    #[serde(default)]
    pub plans: Vec<Plan>,
}

impl PlanStore {
    /// Looks up a plan by ID.
    pub fn find(&self, id: &str) -> Option<&Plan> {
        self.plans.iter().find(|plan| plan.id == id)
    }

    /// Looks up a plan by ID for mutation.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Plan> {
        self.plans.iter_mut().find(|plan| plan.id == id)
    }

    /// The plan the active-plan pointer names, if it is stored.
    pub fn active_plan(&self) -> Option<&Plan> {
        self.active_plan_id.as_deref().and_then(|id| self.find(id))
    }

    /// Returns true if a plan with this ID is stored.
    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Adds a plan, replacing any stored plan with the same ID.
    pub fn upsert(&mut self, plan: Plan) {
        match self.find_mut(&plan.id) {
            Some(existing) => *existing = plan,
            None => self.plans.push(plan),
        }
    }
}

/// The older single-plan storage format.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LegacyPlanData {
    /// Playlist the schedule was generated from
    #[serde(default)]
    pub playlist_data: Option<Playlist>,

    /// The schedule
    #[serde(default)]
    pub plan: Vec<DaySchedule>,

    /// Daily budget in minutes
    #[serde(default)]
    pub daily_watch_time: u32,
}

impl LegacyPlanData {
    /// A legacy slot only counts as a plan when it holds at least one day.
    pub fn has_schedule(&self) -> bool {
        !self.plan.is_empty()
    }
}
