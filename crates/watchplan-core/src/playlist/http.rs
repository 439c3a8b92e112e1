//! Playlist source backed by an HTTP metadata service.

use std::time::Duration;

use log::{debug, warn};

use super::PlaylistSource;
use crate::{
    error::{Result, WatchPlanError},
    models::Playlist,
};

const USER_AGENT: &str = concat!("watchplan/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches playlists with `GET <base_url>/<playlist_id>`.
///
/// The service answers with `{title, videoCount, videos: [{title,
/// durationMinutes}]}`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSource {
    /// Creates a source for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `WatchPlanError::Configuration` if the HTTP client cannot be
    /// built.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| WatchPlanError::Configuration {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// URL requested for `playlist_id`.
    pub fn playlist_url(&self, playlist_id: &str) -> String {
        format!("{}/{playlist_id}", self.base_url)
    }
}

impl PlaylistSource for HttpSource {
    async fn fetch_playlist(&self, playlist_id: &str) -> Result<Playlist> {
        let url = self.playlist_url(playlist_id);
        debug!("Fetching playlist from {url}");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Playlist request to {url} failed: {e}");
            WatchPlanError::fetch(format!("request to {url} failed: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Playlist request to {url} returned {status}");
            return Err(WatchPlanError::fetch(format!("{url} returned HTTP {status}")));
        }

        let mut playlist: Playlist = response
            .json()
            .await
            .map_err(|e| WatchPlanError::fetch(format!("invalid playlist data from {url}: {e}")))?;

        if playlist.id.is_none() {
            playlist.id = Some(playlist_id.to_string());
        }
        Ok(playlist)
    }
}
