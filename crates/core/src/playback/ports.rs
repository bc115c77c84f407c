//! Port interfaces for now-playing polling
//!
//! These traits define the boundaries between the polling loop and the
//! provider client and console implementations.

use async_trait::async_trait;
use lyricer_domain::{NowPlaying, Result};

use crate::lyrics::SongInfo;

/// Trait for anything that can report what the user is listening to
#[async_trait]
pub trait NowPlayingSource: Send + Sync {
    /// Query the item currently playing.
    ///
    /// Returns `LyricerError::EmptyResourceState` when nothing is playing.
    async fn current_resource_state(&self) -> Result<NowPlaying>;
}

/// Trait for rendering a song to the user
pub trait SongPresenter: Send + Sync {
    fn present(&self, song: &SongInfo);
}
