//! Playlist and video models as delivered by a playlist source.

use serde::{Deserialize, Serialize};

/// A single video of a playlist. Identity is its position in the playlist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// Display title of the video
    pub title: String,

    /// Full length of the video in whole minutes
    #[serde(deserialize_with = "super::minutes::deserialize")]
    pub duration_minutes: u32,
}

impl Video {
    /// Creates a video with the given title and duration in minutes.
    pub fn new(title: impl Into<String>, duration_minutes: u32) -> Self {
        Self {
            title: title.into(),
            duration_minutes,
        }
    }
}

/// Playlist metadata together with its ordered videos.
///
/// This is both the shape returned by a playlist fetch and the
/// `playlistData` blob kept in the legacy single-plan slot. Fields the
/// fetch does not provide fall back to their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Playlist identifier, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Playlist title
    #[serde(default)]
    pub title: String,

    /// Number of videos reported by the source
    #[serde(default)]
    pub video_count: u32,

    /// Videos in playlist order
    #[serde(default)]
    pub videos: Vec<Video>,
}

impl Playlist {
    /// Sum of all video durations in minutes.
    pub fn total_duration(&self) -> u64 {
        self.videos
            .iter()
            .map(|video| u64::from(video.duration_minutes))
            .sum()
    }
}
