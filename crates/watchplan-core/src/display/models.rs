//! Display implementations for domain models.
//!
//! All output is markdown so the CLI renderer can style headers and
//! emphasis; it also reads fine as plain text.

use std::fmt;

use super::{datetime::LocalDateTime, duration::format_minutes, ProgressBar};
use crate::models::{DaySchedule, Plan, PlanSummary, PlannedVideoSlot, Playlist, Progress};

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}% ({}/{} videos)",
            self.percent, self.completed_videos, self.total_videos
        )
    }
}

impl fmt::Display for PlannedVideoSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        if self.is_partial {
            let start = self
                .start_time
                .map_or_else(|| "0:00".to_string(), |m| format_minutes(m.into()));
            let end = self
                .end_time
                .map_or_else(|| "end".to_string(), |m| format_minutes(m.into()));
            write!(f, " ({start} - {end})")?;
        }
        write!(f, " [{}]", format_minutes(self.duration.into()))
    }
}

impl fmt::Display for DaySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.completed { "✓" } else { "○" };
        writeln!(
            f,
            "### {mark} Day {} ({})",
            self.day,
            format_minutes(self.total_time.into())
        )?;
        writeln!(f)?;
        for slot in &self.videos {
            writeln!(f, "- {slot}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = self.progress();

        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        if let Some(url) = &self.playlist_url {
            writeln!(f, "- Playlist: {url}")?;
        }
        writeln!(
            f,
            "- Daily budget: {}",
            format_minutes(self.daily_minutes.into())
        )?;
        writeln!(f, "- Days: {}", self.total_days)?;
        writeln!(f, "- Videos: {}", self.total_videos)?;
        if let Some(created_at) = &self.created_at {
            writeln!(f, "- Created: {}", LocalDateTime(created_at))?;
        }
        writeln!(f, "- Progress: {progress}")?;
        writeln!(f)?;
        writeln!(f, "{} {}%", ProgressBar(progress.percent), progress.percent)?;

        if self.plan_data.is_empty() {
            writeln!(f, "\nNo plan generated.")?;
        } else {
            writeln!(f, "\n## Schedule")?;
            writeln!(f)?;
            for day in &self.plan_data {
                write!(f, "{day}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.active { " (active)" } else { "" };
        writeln!(f, "## {} (ID: {}){marker}", self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- {}% completed", self.progress.percent)?;
        writeln!(
            f,
            "- {} days at {} per day",
            self.total_days,
            format_minutes(self.daily_minutes.into())
        )?;
        writeln!(f, "- {}", ProgressBar(self.progress.percent))?;
        writeln!(f)
    }
}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "- Videos: {}", self.video_count)?;
        writeln!(f, "- Total duration: {}", format_minutes(self.total_duration()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Video;

    #[test]
    fn test_partial_slot_shows_range() {
        let slot = PlannedVideoSlot::partial("Lecture", 25, 40);
        assert_eq!(slot.to_string(), "Lecture (0:25 - 0:40) [0:15]");
    }

    #[test]
    fn test_whole_slot_has_no_range() {
        let slot = PlannedVideoSlot::whole("Intro", 65);
        assert_eq!(slot.to_string(), "Intro [1:05]");
    }

    #[test]
    fn test_day_card_marks_completion() {
        let mut day = DaySchedule {
            day: 3,
            videos: vec![PlannedVideoSlot::whole("Intro", 10)],
            total_time: 10,
            completed: false,
        };
        assert!(day.to_string().starts_with("### ○ Day 3 (0:10)"));
        day.completed = true;
        assert!(day.to_string().starts_with("### ✓ Day 3 (0:10)"));
    }

    #[test]
    fn test_playlist_summary_total_duration() {
        let playlist = Playlist {
            title: "Course".to_string(),
            video_count: 2,
            videos: vec![Video::new("A", 50), Video::new("B", 30)],
            ..Default::default()
        };
        let output = playlist.to_string();
        assert!(output.contains("- Videos: 2"));
        assert!(output.contains("- Total duration: 1:20"));
    }
}
