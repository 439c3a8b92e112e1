//! Progress derived from day completion flags.

use serde::{Deserialize, Serialize};

use super::Plan;

/// Aggregate progress of a plan. Always recomputed from the schedule and
/// never persisted.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Slots belonging to completed days
    pub completed_videos: u32,

    /// The plan's own video count
    pub total_videos: u32,

    /// `completed_videos / total_videos` as a rounded percentage
    pub percent: u32,
}

impl Progress {
    /// Computes progress for `plan`.
    ///
    /// Every slot of a completed day counts as one watched video. The
    /// percentage rounds half up and is 0 when the plan has no videos.
    pub fn compute(plan: &Plan) -> Self {
        let completed_videos: u32 = plan
            .plan_data
            .iter()
            .filter(|day| day.completed)
            .map(|day| day.video_count() as u32)
            .sum();
        let total_videos = plan.total_videos;
        let percent = if total_videos == 0 {
            0
        } else {
            let (done, total) = (u64::from(completed_videos), u64::from(total_videos));
            ((200 * done + total) / (2 * total)) as u32
        };

        Self {
            completed_videos,
            total_videos,
            percent,
        }
    }
}

/// Computes progress for `plan`. See [`Progress::compute`].
pub fn compute_progress(plan: &Plan) -> Progress {
    Progress::compute(plan)
}
