//! Day schedule and slot models produced by the scheduler.

use serde::{Deserialize, Serialize};

/// One day's allotted portion of a single video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlannedVideoSlot {
    /// Title of the underlying video
    pub title: String,

    /// Minutes allotted to this slot
    #[serde(deserialize_with = "super::minutes::deserialize")]
    pub duration: u32,

    /// True when the slot covers less than the whole video
    #[serde(default)]
    pub is_partial: bool,

    /// Offset into the video where this slot starts (partial slots only)
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::minutes::deserialize_option"
    )]
    pub start_time: Option<u32>,

    /// Offset into the video where this slot ends (partial slots only)
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::minutes::deserialize_option"
    )]
    pub end_time: Option<u32>,
}

impl PlannedVideoSlot {
    /// A slot covering an entire video.
    pub fn whole(title: impl Into<String>, duration: u32) -> Self {
        Self {
            title: title.into(),
            duration,
            is_partial: false,
            start_time: None,
            end_time: None,
        }
    }

    /// A slot covering `start..end` minutes of a longer video.
    pub fn partial(title: impl Into<String>, start: u32, end: u32) -> Self {
        Self {
            title: title.into(),
            duration: end - start,
            is_partial: true,
            start_time: Some(start),
            end_time: Some(end),
        }
    }
}

/// A single day of a watch schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    /// 1-based day number, contiguous within a plan
    pub day: u32,

    /// Slots to watch on this day, in playlist order
    pub videos: Vec<PlannedVideoSlot>,

    /// Sum of the slot durations
    #[serde(deserialize_with = "super::minutes::deserialize")]
    pub total_time: u32,

    /// Set only when the user marks the day as watched
    #[serde(default)]
    pub completed: bool,
}

impl DaySchedule {
    /// Number of slots scheduled on this day.
    pub fn video_count(&self) -> usize {
        self.videos.len()
    }
}
