//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::{collections::Days, duration::format_minutes};
use crate::{handlers::SchedulePreview, models::Plan};

/// Wrapper type for displaying the result of create operations.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created plan with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, with the
/// list of changes that were applied.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Plan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated plan with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Progress: {}", self.resource.progress())
    }
}

impl fmt::Display for SchedulePreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.playlist)?;
        writeln!(
            f,
            "- Daily budget: {}",
            format_minutes(self.daily_minutes.get().into())
        )?;
        writeln!(f, "- Days: {}", self.days.len())?;
        writeln!(f)?;
        write!(f, "{}", Days(&self.days))
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;
    use crate::{
        models::{Playlist, Video},
        scheduler::generate_day_wise_plan,
    };

    fn sample_plan() -> Plan {
        let playlist = Playlist {
            title: "Course".to_string(),
            video_count: 2,
            videos: vec![Video::new("A", 10), Video::new("B", 10)],
            ..Default::default()
        };
        let daily = NonZeroU32::new(15).expect("non-zero");
        let days = generate_day_wise_plan(&playlist.videos, daily);
        Plan::from_schedule("plan-1", &playlist, daily.get(), days)
    }

    #[test]
    fn test_create_result_display() {
        let output = CreateResult::new(sample_plan()).to_string();
        assert!(output.contains("Created plan with ID: plan-1"));
        assert!(output.contains("# Course"));
        assert!(output.contains("B (0:05 - 0:10) [0:05]"));
    }

    #[test]
    fn test_update_result_lists_changes() {
        let mut plan = sample_plan();
        plan.set_day_completion(1, true).expect("valid day");
        let output =
            UpdateResult::with_changes(plan, vec!["Marked day 2 as completed".to_string()])
                .to_string();
        assert!(output.contains("Changes made:"));
        assert!(output.contains("- Marked day 2 as completed"));
        assert!(output.contains("Progress: 50% (1/2 videos)"));
    }
}
