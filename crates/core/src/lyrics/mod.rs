//! Lyrics lookup domain

pub mod ports;

pub use ports::LyricsFetcher;

use lyricer_domain::Result;

/// A song ready to be shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongInfo {
    pub artist: String,
    pub title: String,
    /// `None` until a fetch succeeds.
    pub lyrics: Option<String>,
}

impl SongInfo {
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self { artist: artist.into(), title: title.into(), lyrics: None }
    }

    /// Look up lyrics for the current artist and title and store them.
    ///
    /// On failure the previous lyrics are left as they were.
    pub async fn fetch_lyrics(&mut self, fetcher: &dyn LyricsFetcher) -> Result<()> {
        let lyrics = fetcher.fetch_lyrics(&self.artist, &self.title).await?;
        self.lyrics = Some(lyrics);
        Ok(())
    }
}
