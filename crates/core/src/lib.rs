//! # Lyricer Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for the now-playing source, lyrics lookup and
//!   song presentation
//! - The polling loop that keeps the displayed song current
//!
//! ## Architecture Principles
//! - Only depends on `lyricer-domain`
//! - No HTTP, console or platform code
//! - All external dependencies via traits

pub mod lyrics;
pub mod playback;

// Re-export specific items to avoid ambiguity
pub use lyrics::{LyricsFetcher, SongInfo};
pub use playback::ports::{NowPlayingSource, SongPresenter};
pub use playback::{PollSignal, PollingLoop, PollingStats};
