//! Now-playing polling loop - core business logic

use std::sync::Arc;
use std::time::Duration;

use lyricer_domain::constants::{FALLBACK_DELAY_SECS, MIN_POLL_INTERVAL_SECS};
use lyricer_domain::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::ports::{NowPlayingSource, SongPresenter};
use crate::lyrics::{LyricsFetcher, SongInfo};

/// External events that interrupt the wait for the current song to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollSignal {
    /// Re-query immediately.
    Refresh,
    /// Stop polling.
    Quit,
}

/// Counters reported when the loop exits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollingStats {
    pub polls: u64,
    pub failures: u64,
    pub refreshes: u64,
}

/// Re-queries the now-playing source whenever the current item should have
/// ended, or when asked to.
pub struct PollingLoop {
    source: Arc<dyn NowPlayingSource>,
    lyrics: Arc<dyn LyricsFetcher>,
    presenter: Arc<dyn SongPresenter>,
    fallback_delay: Duration,
    min_interval: Duration,
}

impl PollingLoop {
    pub fn new(
        source: Arc<dyn NowPlayingSource>,
        lyrics: Arc<dyn LyricsFetcher>,
        presenter: Arc<dyn SongPresenter>,
    ) -> Self {
        Self {
            source,
            lyrics,
            presenter,
            fallback_delay: Duration::from_secs(FALLBACK_DELAY_SECS),
            min_interval: Duration::from_secs(MIN_POLL_INTERVAL_SECS),
        }
    }

    /// Override the wait applied after a failed query.
    #[must_use]
    pub fn with_fallback_delay(mut self, delay: Duration) -> Self {
        self.fallback_delay = delay;
        self
    }

    /// Override the shortest wait after a successful query.
    #[must_use]
    pub fn with_min_interval(mut self, interval: Duration) -> Self {
        self.min_interval = interval;
        self
    }

    pub fn fallback_delay(&self) -> Duration {
        self.fallback_delay
    }

    /// Query once, present the song, and return how long to wait before the
    /// next query.
    ///
    /// The wait is never shorter than the minimum interval, so an item
    /// reported as already finished does not trigger back-to-back queries.
    ///
    /// Failures never propagate: they are logged and turned into the
    /// fallback delay.
    pub async fn tick(&self) -> Duration {
        self.next_delay(self.poll_once().await)
    }

    /// Drive the loop until [`PollSignal::Quit`] arrives or every signal
    /// sender is dropped.
    ///
    /// The first query runs immediately. Signals only interrupt the wait
    /// between queries; a query already in flight always completes.
    pub async fn run(&self, mut signals: mpsc::Receiver<PollSignal>) -> PollingStats {
        let mut stats = PollingStats::default();
        let mut delay = self.tick_counted(&mut stats).await;

        loop {
            debug!(wait_ms = delay.as_millis(), "Waiting for the song to end");
            tokio::select! {
                () = tokio::time::sleep(delay) => {}
                signal = signals.recv() => match signal {
                    Some(PollSignal::Refresh) => {
                        debug!("Manual refresh requested");
                        stats.refreshes += 1;
                    }
                    Some(PollSignal::Quit) | None => break,
                },
            }
            delay = self.tick_counted(&mut stats).await;
        }

        info!(
            polls = stats.polls,
            failures = stats.failures,
            refreshes = stats.refreshes,
            "Polling loop stopped"
        );
        stats
    }

    async fn tick_counted(&self, stats: &mut PollingStats) -> Duration {
        let outcome = self.poll_once().await;
        stats.polls += 1;
        if outcome.is_err() {
            stats.failures += 1;
        }
        self.next_delay(outcome)
    }

    async fn poll_once(&self) -> Result<Duration> {
        let playing = self.source.current_resource_state().await?;
        let remaining = playing.remaining;
        if !playing.is_playing {
            debug!(artist = %playing.artist, title = %playing.title, "Playback is paused");
        }

        let mut song = SongInfo::new(playing.artist, playing.title);
        if let Err(err) = song.fetch_lyrics(self.lyrics.as_ref()).await {
            warn!(
                artist = %song.artist,
                title = %song.title,
                error = %err,
                "Could not fetch lyrics"
            );
        }
        self.presenter.present(&song);

        Ok(remaining)
    }

    fn next_delay(&self, outcome: Result<Duration>) -> Duration {
        match outcome {
            Ok(remaining) if remaining < self.min_interval => {
                debug!(
                    remaining_ms = remaining.as_millis(),
                    "Item about to end; waiting the minimum interval"
                );
                self.min_interval
            }
            Ok(remaining) => remaining,
            Err(err) => {
                warn!(
                    error = %err,
                    retry_in_secs = self.fallback_delay.as_secs(),
                    "Couldn't retrieve currently played song"
                );
                self.fallback_delay
            }
        }
    }
}
