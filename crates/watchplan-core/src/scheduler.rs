//! Greedy day-by-day partitioning of a playlist.
//!
//! Videos are packed in playlist order into days of at most `daily_minutes`.
//! A video that does not fit in what is left of the current day is split, and
//! its remainder continues on the following day(s). Splitting keeps track of
//! the offset into the video so every partial slot carries its start and end
//! minute.

use std::num::NonZeroU32;

use log::debug;

use crate::models::{DaySchedule, PlannedVideoSlot, Video};

/// Partitions `videos` into consecutive days of at most `daily_minutes`.
///
/// The result is deterministic and never reorders videos. A video with zero
/// duration still gets a (zero-length) slot. Day numbers start at 1.
///
/// # Examples
///
/// ```rust
/// use std::num::NonZeroU32;
/// use watchplan_core::{models::Video, scheduler::generate_day_wise_plan};
///
/// let videos = vec![Video::new("A", 40)];
/// let days = generate_day_wise_plan(&videos, NonZeroU32::new(25).unwrap());
///
/// assert_eq!(days.len(), 2);
/// assert_eq!(days[0].total_time, 25);
/// assert_eq!(days[1].videos[0].start_time, Some(25));
/// assert_eq!(days[1].videos[0].end_time, Some(40));
/// ```
pub fn generate_day_wise_plan(videos: &[Video], daily_minutes: NonZeroU32) -> Vec<DaySchedule> {
    let mut builder = DayBuilder::new(daily_minutes.get());

    for video in videos {
        let full = video.duration_minutes;
        let mut offset = 0;
        loop {
            let take = (full - offset).min(builder.remaining);
            let slot = if take < full {
                PlannedVideoSlot::partial(&video.title, offset, offset + take)
            } else {
                PlannedVideoSlot::whole(&video.title, take)
            };
            builder.push(slot);
            offset += take;

            if offset >= full {
                break;
            }
        }
    }

    let days = builder.finish();
    debug!(
        "Scheduled {} videos into {} days of {} minutes",
        videos.len(),
        days.len(),
        daily_minutes
    );
    days
}

/// Accumulates slots into the day currently being filled.
struct DayBuilder {
    daily_minutes: u32,
    remaining: u32,
    slots: Vec<PlannedVideoSlot>,
    days: Vec<DaySchedule>,
}

impl DayBuilder {
    fn new(daily_minutes: u32) -> Self {
        Self {
            daily_minutes,
            remaining: daily_minutes,
            slots: Vec::new(),
            days: Vec::new(),
        }
    }

    fn push(&mut self, slot: PlannedVideoSlot) {
        self.remaining -= slot.duration;
        self.slots.push(slot);
        if self.remaining == 0 {
            self.close_day();
        }
    }

    fn close_day(&mut self) {
        let videos = std::mem::take(&mut self.slots);
        let total_time = videos.iter().map(|slot| slot.duration).sum();
        self.days.push(DaySchedule {
            day: self.days.len() as u32 + 1,
            videos,
            total_time,
            completed: false,
        });
        self.remaining = self.daily_minutes;
    }

    fn finish(mut self) -> Vec<DaySchedule> {
        if !self.slots.is_empty() {
            self.close_day();
        }
        self.days
    }
}
