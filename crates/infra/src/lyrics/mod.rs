//! Lyrics service adapters

pub mod http;

pub use http::HttpLyricsFetcher;
