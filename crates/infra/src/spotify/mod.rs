//! Spotify Web API integration

pub mod client;
pub mod now_playing;

pub use client::SpotifyClient;
pub use now_playing::{parse_now_playing, CurrentlyPlaying};
