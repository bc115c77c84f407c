//! Port interfaces for lyrics lookup

use async_trait::async_trait;
use lyricer_domain::Result;

/// Trait for services that can provide lyrics for a song
#[async_trait]
pub trait LyricsFetcher: Send + Sync {
    /// Fetch the lyrics of `title` by `artist`.
    ///
    /// Returns `LyricerError::LyricsNotFound` when the service has no entry.
    async fn fetch_lyrics(&self, artist: &str, title: &str) -> Result<String>;
}
