//! # Lyricer Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Configuration loading (JSON/TOML + environment overrides)
//! - The HTTP client wrapper
//! - The OAuth loopback callback server and token exchange
//! - The Spotify client (session owner, currently-playing query)
//! - The HTTP lyrics fetcher
//! - Browser launching per platform
//!
//! ## Architecture
//! - Implements traits defined in `lyricer-core`
//! - Depends on `lyricer-common`, `lyricer-domain` and `lyricer-core`
//! - Contains all "impure" code (network, processes, files)

pub mod config;
pub mod errors;
pub mod http;
pub mod lyrics;
pub mod oauth;
pub mod platform;
pub mod spotify;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use lyrics::HttpLyricsFetcher;
pub use oauth::{AuthCoordinator, CallbackServer};
pub use platform::{BrowserLauncher, SystemBrowser};
pub use spotify::SpotifyClient;
