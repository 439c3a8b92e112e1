//! Minute and progress formatting helpers.

use std::fmt;

/// Formats a minute count as `H:MM`.
///
/// ```rust
/// use watchplan_core::display::format_minutes;
///
/// assert_eq!(format_minutes(65), "1:05");
/// assert_eq!(format_minutes(25), "0:25");
/// assert_eq!(format_minutes(0), "0:00");
/// ```
pub fn format_minutes(minutes: u64) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

/// Fixed-width text progress bar for a percentage.
///
/// Values above 100 render as a full bar.
pub struct ProgressBar(pub u32);

impl ProgressBar {
    const WIDTH: u32 = 20;
}

impl fmt::Display for ProgressBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filled = self.0.min(100) * Self::WIDTH / 100;
        write!(
            f,
            "[{}{}]",
            "█".repeat(filled as usize),
            "░".repeat((Self::WIDTH - filled) as usize)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_minutes_over_ten_hours() {
        assert_eq!(format_minutes(601), "10:01");
    }

    #[test]
    fn test_progress_bar_fill() {
        assert_eq!(ProgressBar(0).to_string(), format!("[{}]", "░".repeat(20)));
        assert_eq!(
            ProgressBar(50).to_string(),
            format!("[{}{}]", "█".repeat(10), "░".repeat(10))
        );
        assert_eq!(ProgressBar(150).to_string(), format!("[{}]", "█".repeat(20)));
    }
}
