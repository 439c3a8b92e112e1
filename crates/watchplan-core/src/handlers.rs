//! Stateless workflows shared by interfaces.
//!
//! These combine parameter validation, the playlist source and the scheduler
//! without touching storage. Stateful workflows live on
//! [`crate::session::Session`] and [`crate::Planner`].

use std::num::NonZeroU32;

use crate::{
    error::{Result, WatchPlanError},
    models::{DaySchedule, Playlist},
    params::{validate_daily_minutes, GeneratePlan},
    playlist::{extract_playlist_id, PlaylistSource},
    scheduler::generate_day_wise_plan,
};

/// A schedule computed for a playlist but not saved.
#[derive(Debug, Clone)]
pub struct SchedulePreview {
    /// The fetched playlist
    pub playlist: Playlist,
    /// Budget the schedule was built with
    pub daily_minutes: NonZeroU32,
    /// The computed days
    pub days: Vec<DaySchedule>,
}

/// Validates input, fetches the playlist and schedules it.
///
/// # Errors
///
/// Returns `WatchPlanError::InvalidInput` for a bad budget or playlist
/// reference (checked before anything is fetched) and
/// `WatchPlanError::Fetch` when the source fails.
pub async fn preview_plan<S: PlaylistSource>(
    source: &S,
    params: &GeneratePlan,
) -> Result<SchedulePreview> {
    let daily_minutes = validate_daily_minutes(params.daily_minutes)?;
    let playlist_id = extract_playlist_id(&params.playlist)?.ok_or_else(|| {
        WatchPlanError::invalid_input("playlist")
            .with_reason(format!("'{}' is not a playlist URL or ID", params.playlist))
    })?;

    let playlist = source.fetch_playlist(&playlist_id).await?;
    let days = generate_day_wise_plan(&playlist.videos, daily_minutes);

    Ok(SchedulePreview {
        playlist,
        daily_minutes,
        days,
    })
}
