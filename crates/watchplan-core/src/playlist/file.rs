//! Playlist source reading exported JSON files.

use std::path::{Path, PathBuf};

use log::debug;

use super::PlaylistSource;
use crate::{
    error::{Result, WatchPlanError},
    models::Playlist,
};

/// Reads playlists from JSON documents on disk.
///
/// Pointed at a directory, the playlist `ID` is read from `<dir>/<ID>.json`.
/// Pointed at a file, that file is returned whatever ID is asked for.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source rooted at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn resolve(&self, playlist_id: &str) -> PathBuf {
        if self.path.is_dir() {
            self.path.join(format!("{playlist_id}.json"))
        } else {
            self.path.clone()
        }
    }
}

impl PlaylistSource for JsonFileSource {
    async fn fetch_playlist(&self, playlist_id: &str) -> Result<Playlist> {
        let path = self.resolve(playlist_id);
        debug!("Reading playlist {playlist_id} from {}", path.display());

        let raw = tokio::fs::read_to_string(&path).await.map_err(|e| {
            WatchPlanError::fetch(format!("cannot read {}: {e}", path.display()))
        })?;
        let mut playlist: Playlist = serde_json::from_str(&raw).map_err(|e| {
            WatchPlanError::fetch(format!("invalid playlist data in {}: {e}", path.display()))
        })?;

        if playlist.id.is_none() {
            playlist.id = Some(playlist_id.to_string());
        }
        Ok(playlist)
    }
}
