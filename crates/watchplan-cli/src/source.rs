//! Playlist source selection from command-line configuration.

use std::path::PathBuf;

use log::debug;
use watchplan_core::{
    playlist::{HttpSource, JsonFileSource, PlaylistSource},
    Playlist, Result, WatchPlanError,
};

/// The playlist source picked for one invocation.
pub enum Source {
    /// A local export, given with `--from-file`
    File(JsonFileSource),
    /// The playlist service, given with `--api-url`
    Http(HttpSource),
}

impl Source {
    /// Picks the file source when a path is given, otherwise the service.
    ///
    /// # Errors
    ///
    /// Returns `WatchPlanError::Configuration` when neither is configured.
    pub fn select(from_file: Option<PathBuf>, api_url: Option<&str>) -> Result<Self> {
        match (from_file, api_url) {
            (Some(path), _) => {
                debug!("Using playlist file {}", path.display());
                Ok(Self::File(JsonFileSource::new(path)))
            }
            (None, Some(url)) => {
                debug!("Using playlist service at {url}");
                Ok(Self::Http(HttpSource::new(url)?))
            }
            (None, None) => Err(WatchPlanError::Configuration {
                message: "no playlist source configured; pass --from-file or set WATCHPLAN_API_URL"
                    .to_string(),
            }),
        }
    }
}

impl PlaylistSource for Source {
    async fn fetch_playlist(&self, playlist_id: &str) -> Result<Playlist> {
        match self {
            Self::File(source) => source.fetch_playlist(playlist_id).await,
            Self::Http(source) => source.fetch_playlist(playlist_id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_takes_precedence() {
        let source = Source::select(Some(PathBuf::from("list.json")), Some("http://localhost:1"))
            .expect("source");
        assert!(matches!(source, Source::File(_)));
    }

    #[test]
    fn test_service_when_no_file() {
        let source = Source::select(None, Some("http://localhost:1")).expect("source");
        assert!(matches!(source, Source::Http(_)));
    }

    #[test]
    fn test_missing_source_is_configuration_error() {
        let err = Source::select(None, None).err().expect("error");
        assert!(matches!(err, WatchPlanError::Configuration { .. }));
    }
}
