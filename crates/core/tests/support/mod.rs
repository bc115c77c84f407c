//! Shared test helpers for `lyricer-core` integration tests.
//!
//! Lightweight in-memory fakes for the playback and lyrics ports.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lyricer_core::{LyricsFetcher, NowPlayingSource, SongInfo, SongPresenter};
use lyricer_domain::{LyricerError, NowPlaying, Result as DomainResult};
use tokio::sync::mpsc;

/// Replays queued results, then repeats the last one forever.
pub struct ScriptedSource {
    script: Mutex<VecDeque<DomainResult<NowPlaying>>>,
    last: Mutex<DomainResult<NowPlaying>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(script: Vec<DomainResult<NowPlaying>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            last: Mutex::new(Err(LyricerError::EmptyResourceState)),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NowPlayingSource for ScriptedSource {
    async fn current_resource_state(&self) -> DomainResult<NowPlaying> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut last = self.last.lock().unwrap();
        if let Some(next) = self.script.lock().unwrap().pop_front() {
            *last = next;
        }
        last.clone()
    }
}

/// Answers every lookup with `"{title} lyrics"`.
pub struct StaticLyrics;

#[async_trait]
impl LyricsFetcher for StaticLyrics {
    async fn fetch_lyrics(&self, _artist: &str, title: &str) -> DomainResult<String> {
        Ok(format!("{title} lyrics"))
    }
}

/// Forwards every presented song to a channel the test can await.
pub struct ChannelPresenter {
    tx: mpsc::UnboundedSender<SongInfo>,
}

impl ChannelPresenter {
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<SongInfo>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { tx }), rx)
    }
}

impl SongPresenter for ChannelPresenter {
    fn present(&self, song: &SongInfo) {
        let _ = self.tx.send(song.clone());
    }
}

pub fn playing(artist: &str, title: &str, duration_ms: u64, progress_ms: u64) -> NowPlaying {
    NowPlaying::from_progress(artist.into(), title.into(), duration_ms, progress_ms, true)
}
