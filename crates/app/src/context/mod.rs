//! Application context - dependency injection container

use std::sync::Arc;

use lyricer_core::{PollingLoop, SongPresenter};
use lyricer_domain::{LyricerConfig, LyricerError, Result};
use lyricer_infra::{
    config, BrowserLauncher, HttpClient, HttpLyricsFetcher, SpotifyClient, SystemBrowser,
};
use tracing::info;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: LyricerConfig,
    pub spotify: Arc<SpotifyClient>,
    pub lyrics: Arc<HttpLyricsFetcher>,
}

impl AppContext {
    /// Load configuration from disk and environment and wire the services,
    /// opening consent pages in the system browser.
    ///
    /// # Errors
    /// Returns `LyricerError::InvalidConfig` if no valid config is found.
    pub fn new() -> Result<Self> {
        let config = config::load()?;
        Self::from_config(config, Arc::new(SystemBrowser::new()))
    }

    /// # Errors
    /// Returns `LyricerError::InvalidConfig` if the HTTP client cannot be
    /// built or the lyrics base URL is malformed.
    pub fn from_config(config: LyricerConfig, browser: Arc<dyn BrowserLauncher>) -> Result<Self> {
        let http = HttpClient::from_settings(&config.http)?;
        let lyrics = HttpLyricsFetcher::from_settings(http.clone(), &config.lyrics)?;
        let spotify = SpotifyClient::new(config.spotify.clone(), http, browser);

        Ok(Self { config, spotify: Arc::new(spotify), lyrics: Arc::new(lyrics) })
    }

    /// Run the authorization code flow to completion.
    ///
    /// Waits for the user to approve in the browser, then exchanges the code
    /// for an access token.
    ///
    /// # Errors
    /// - `CallbackServer` if the listener cannot start or stops before a
    ///   code arrives
    /// - `AccessDenied`, `Transport` or `Decode` from the token exchange
    pub async fn authenticate(&self) -> Result<()> {
        let code_rx = self.spotify.authorize().await?;
        info!("Waiting for Spotify authorization in the browser");
        code_rx.await.map_err(|_| {
            LyricerError::CallbackServer("listener stopped before delivering a code".into())
        })?;

        let token_rx = self.spotify.access().await?;
        token_rx.await.map_err(|_| {
            LyricerError::Internal("token exchange ended without a result".into())
        })??;
        info!("Accessed Spotify");
        Ok(())
    }

    /// Polling loop over the Spotify client and lyrics fetcher.
    #[must_use]
    pub fn polling_loop(&self, presenter: Arc<dyn SongPresenter>) -> PollingLoop {
        PollingLoop::new(self.spotify.clone(), self.lyrics.clone(), presenter)
            .with_fallback_delay(self.config.polling.fallback_delay())
    }
}
