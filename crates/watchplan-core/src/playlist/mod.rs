//! Playlist sources and playlist reference parsing.
//!
//! Fetching playlist metadata is an external concern; the planner only needs
//! something implementing [`PlaylistSource`]. Two sources are provided:
//! [`JsonFileSource`] for exported playlists on disk and [`HttpSource`] for a
//! metadata backend. Any failure surfaces as `WatchPlanError::Fetch`.

use std::future::Future;

use url::Url;

use crate::{
    error::{Result, WatchPlanError},
    models::Playlist,
};

pub mod file;
pub mod http;

pub use file::JsonFileSource;
pub use http::HttpSource;

/// Something that can resolve a playlist ID into its metadata and videos.
pub trait PlaylistSource {
    /// Fetches the playlist with the given ID.
    fn fetch_playlist(&self, playlist_id: &str) -> impl Future<Output = Result<Playlist>> + Send;
}

/// Extracts a playlist ID from a playlist URL or a bare ID.
///
/// URLs must carry a `list` query parameter. Bare IDs may only contain
/// ASCII letters, digits, `-` and `_`.
///
/// # Errors
///
/// Returns `WatchPlanError::InvalidInput` if the input is blank.
///
/// # Examples
///
/// ```rust
/// use watchplan_core::playlist::extract_playlist_id;
///
/// let id = extract_playlist_id("https://www.youtube.com/playlist?list=PL12ab").unwrap();
/// assert_eq!(id.as_deref(), Some("PL12ab"));
/// assert_eq!(extract_playlist_id("PL12ab").unwrap().as_deref(), Some("PL12ab"));
/// assert_eq!(extract_playlist_id("https://example.com/watch?v=1").unwrap(), None);
/// ```
pub fn extract_playlist_id(input: &str) -> Result<Option<String>> {
    let input = input.trim();
    if input.is_empty() {
        return Err(WatchPlanError::invalid_input("playlist").with_reason("Please enter a playlist URL"));
    }

    if let Ok(url) = Url::parse(input) {
        let id = url
            .query_pairs()
            .find(|(key, _)| key == "list")
            .map(|(_, value)| value.into_owned())
            .filter(|value| is_playlist_id(value));
        return Ok(id);
    }

    Ok(is_playlist_id(input).then(|| input.to_string()))
}

fn is_playlist_id(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_watch_url_with_list() {
        let id = extract_playlist_id("https://www.youtube.com/watch?v=abc&list=PLxyz_9-0&index=2")
            .expect("valid input");
        assert_eq!(id.as_deref(), Some("PLxyz_9-0"));
    }

    #[test]
    fn test_blank_input_is_invalid() {
        let err = extract_playlist_id("   ").unwrap_err();
        assert!(matches!(err, WatchPlanError::InvalidInput { .. }));
    }

    #[test]
    fn test_unrecognized_input_yields_none() {
        assert_eq!(extract_playlist_id("not a playlist").expect("valid input"), None);
        assert_eq!(
            extract_playlist_id("https://www.youtube.com/playlist?list=").expect("valid input"),
            None
        );
    }
}
