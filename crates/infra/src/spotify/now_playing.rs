//! Currently-playing response decoding

use lyricer_domain::{LyricerError, NowPlaying, Result};
use serde::Deserialize;
use tracing::warn;

use crate::errors::InfraError;

/// Subset of `GET /v1/me/player/currently-playing` the client reads.
#[derive(Debug, Deserialize)]
pub struct CurrentlyPlaying {
    #[serde(default)]
    pub progress_ms: Option<u64>,
    #[serde(default)]
    pub is_playing: bool,
    #[serde(default)]
    pub item: Option<PlayingItem>,
}

#[derive(Debug, Deserialize)]
pub struct PlayingItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub artists: Vec<Artist>,
}

#[derive(Debug, Deserialize)]
pub struct Artist {
    #[serde(default)]
    pub name: String,
}

impl CurrentlyPlaying {
    /// Reduce the response to a [`NowPlaying`] snapshot.
    ///
    /// Only the first artist is kept.
    ///
    /// # Errors
    /// `EmptyResourceState` when the response names neither an artist nor a
    /// title.
    pub fn into_now_playing(self) -> Result<NowPlaying> {
        let item = self.item.ok_or(LyricerError::EmptyResourceState)?;
        let artist = item.artists.into_iter().next().map(|a| a.name).unwrap_or_default();

        if artist.is_empty() && item.name.is_empty() {
            return Err(LyricerError::EmptyResourceState);
        }

        let progress_ms = self.progress_ms.unwrap_or_default();
        if progress_ms > item.duration_ms {
            warn!(
                progress_ms,
                duration_ms = item.duration_ms,
                "Progress exceeds duration; treating remaining time as zero"
            );
        }

        Ok(NowPlaying::from_progress(
            artist,
            item.name,
            item.duration_ms,
            progress_ms,
            self.is_playing,
        ))
    }
}

/// Decode a response body.
///
/// # Errors
/// - `EmptyResourceState` for a blank body or an empty item
/// - `Decode` for malformed JSON
pub fn parse_now_playing(body: &str) -> Result<NowPlaying> {
    if body.trim().is_empty() {
        return Err(LyricerError::EmptyResourceState);
    }
    let response: CurrentlyPlaying =
        serde_json::from_str(body).map_err(|err| LyricerError::from(InfraError::from(err)))?;
    response.into_now_playing()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn parses_playing_track() {
        let body = r#"{
            "progress_ms": 30000,
            "item": { "artists": [{ "name": "A" }], "name": "T", "duration_ms": 200000 },
            "is_playing": true
        }"#;

        let playing = parse_now_playing(body).unwrap();
        assert_eq!(
            playing,
            NowPlaying {
                artist: "A".into(),
                title: "T".into(),
                remaining: Duration::from_millis(170_000),
                is_playing: true,
            }
        );
    }

    #[test]
    fn empty_item_is_empty_resource_state() {
        let body = r#"{ "item": { "artists": [], "name": "", "duration_ms": 0 }, "progress_ms": 0 }"#;
        assert_eq!(parse_now_playing(body), Err(LyricerError::EmptyResourceState));
    }

    #[test]
    fn null_item_is_empty_resource_state() {
        let body = r#"{ "item": null, "progress_ms": null, "is_playing": false }"#;
        assert_eq!(parse_now_playing(body), Err(LyricerError::EmptyResourceState));
        assert_eq!(parse_now_playing("  "), Err(LyricerError::EmptyResourceState));
    }

    #[test]
    fn first_artist_wins() {
        let body = r#"{
            "progress_ms": 0,
            "item": { "artists": [{ "name": "Lead" }, { "name": "Feat" }], "name": "T", "duration_ms": 1000 },
            "is_playing": false
        }"#;
        let playing = parse_now_playing(body).unwrap();
        assert_eq!(playing.artist, "Lead");
        assert!(!playing.is_playing);
    }

    #[test]
    fn title_without_artist_is_accepted() {
        let body = r#"{ "progress_ms": 10, "item": { "artists": [], "name": "Episode", "duration_ms": 20 } }"#;
        let playing = parse_now_playing(body).unwrap();
        assert_eq!(playing.title, "Episode");
        assert_eq!(playing.remaining, Duration::from_millis(10));
    }

    #[test]
    fn overshooting_progress_clamps_to_zero() {
        let body = r#"{ "progress_ms": 5000, "item": { "artists": [{ "name": "A" }], "name": "T", "duration_ms": 1000 } }"#;
        assert_eq!(parse_now_playing(body).unwrap().remaining, Duration::ZERO);
    }

    #[test]
    fn malformed_json_is_decode_error() {
        assert!(matches!(parse_now_playing("{ \"item\": "), Err(LyricerError::Decode(_))));
    }
}
