//! Now-playing snapshot

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// The item currently playing in the user's client.
///
/// Rebuilt from scratch on every poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NowPlaying {
    pub artist: String,
    pub title: String,
    /// Time left until the item ends.
    pub remaining: Duration,
    /// `false` when playback is paused.
    pub is_playing: bool,
}

impl NowPlaying {
    /// Build a snapshot from the provider's millisecond counters.
    ///
    /// `remaining = duration_ms - progress_ms`, saturating at zero when the
    /// provider reports more progress than the item lasts.
    #[must_use]
    pub fn from_progress(
        artist: String,
        title: String,
        duration_ms: u64,
        progress_ms: u64,
        is_playing: bool,
    ) -> Self {
        Self {
            artist,
            title,
            remaining: Duration::from_millis(duration_ms.saturating_sub(progress_ms)),
            is_playing,
        }
    }
}
