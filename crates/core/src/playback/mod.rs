//! Now-playing polling domain

pub mod ports;
pub mod service;

pub use ports::{NowPlayingSource, SongPresenter};
pub use service::{PollSignal, PollingLoop, PollingStats};
