//! Plan model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{DaySchedule, Playlist, Progress};
use crate::error::{Result, WatchPlanError};

/// Advisory viewing cursor. Completion is tracked on each
/// [`DaySchedule::completed`], never here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlanCursor {
    /// 1-based day the viewer is on
    pub current_day: u32,

    /// Index of the last watched slot within the current day
    pub last_watched_index: u32,
}

impl Default for PlanCursor {
    fn default() -> Self {
        Self {
            current_day: 1,
            last_watched_index: 0,
        }
    }
}

/// A saved watch schedule for one playlist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Unique identifier for the plan
    pub id: String,

    /// Title, taken from the playlist
    pub title: String,

    /// Playlist the plan was generated from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playlist_url: Option<String>,

    /// Video count reported by the playlist; the progress denominator
    #[serde(default)]
    pub total_videos: u32,

    /// Number of days in the schedule
    #[serde(default)]
    pub total_days: u32,

    /// Daily viewing budget the schedule was built with
    #[serde(default)]
    pub daily_minutes: u32,

    /// The schedule itself
    #[serde(default)]
    pub plan_data: Vec<DaySchedule>,

    /// Advisory viewing cursor
    #[serde(default)]
    pub progress: PlanCursor,

    /// Timestamp when the plan was created (UTC)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

impl Plan {
    /// Builds a plan record for a freshly generated schedule.
    pub fn from_schedule(
        id: impl Into<String>,
        playlist: &Playlist,
        daily_minutes: u32,
        days: Vec<DaySchedule>,
    ) -> Self {
        Self {
            id: id.into(),
            title: playlist.title.clone(),
            playlist_url: playlist.id.clone(),
            total_videos: playlist.video_count,
            total_days: days.len() as u32,
            daily_minutes,
            plan_data: days,
            progress: PlanCursor::default(),
            created_at: Some(Timestamp::now()),
        }
    }

    /// Derives progress from the day completion flags.
    pub fn progress(&self) -> Progress {
        Progress::compute(self)
    }

    /// Marks a day as completed or not.
    ///
    /// # Errors
    ///
    /// Returns [`WatchPlanError::OutOfRange`] if `day_index` is not a valid
    /// index into the schedule.
    pub fn set_day_completion(&mut self, day_index: usize, completed: bool) -> Result<()> {
        let len = self.plan_data.len();
        let day = self
            .plan_data
            .get_mut(day_index)
            .ok_or(WatchPlanError::OutOfRange {
                index: day_index,
                len,
            })?;
        day.completed = completed;
        self.advance_cursor();
        Ok(())
    }

    /// Points the cursor at the first unfinished day, or the last day once
    /// everything is watched.
    fn advance_cursor(&mut self) {
        let next = self
            .plan_data
            .iter()
            .find(|day| !day.completed)
            .or_else(|| self.plan_data.last())
            .map_or(1, |day| day.day);
        if next != self.progress.current_day {
            self.progress = PlanCursor {
                current_day: next,
                last_watched_index: 0,
            };
        }
    }
}
