//! Application constants
//!
//! Centralized location for the domain-level constants used throughout the
//! application.

// Spotify Web API
pub const SPOTIFY_NOW_PLAYING_URL: &str = "https://api.spotify.com/v1/me/player/currently-playing";

// Polling
pub const FALLBACK_DELAY_SECS: u64 = 30;
/// Shortest wait between two successful queries.
pub const MIN_POLL_INTERVAL_SECS: u64 = 5;

// HTTP
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("lyricer/", env!("CARGO_PKG_VERSION"));

// Lyrics backend
pub const DEFAULT_LYRICS_BASE_URL: &str = "https://api.lyrics.ovh/v1";

// Console
pub const CONSOLE_PROMPT: &str = "Q to quit, R to refresh";
