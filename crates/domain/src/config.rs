//! Configuration structures
//!
//! `LyricerConfig` is read once at startup and shared read-only afterwards.
//! Field names accept the legacy PascalCase keys (`AuthURL`, `ClientID`, ...)
//! so existing `hidden_conf.json` files keep working.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::{
    DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_LYRICS_BASE_URL, FALLBACK_DELAY_SECS,
    SPOTIFY_NOW_PLAYING_URL,
};
use crate::errors::{LyricerError, Result};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LyricerConfig {
    #[serde(alias = "Spotify")]
    pub spotify: ProviderConfig,
    #[serde(default)]
    pub http: HttpSettings,
    #[serde(default)]
    pub polling: PollingSettings,
    #[serde(default)]
    pub lyrics: LyricsSettings,
}

impl LyricerConfig {
    /// Check every URL in the configuration.
    ///
    /// # Errors
    /// Returns `LyricerError::InvalidConfig` naming the first malformed field.
    pub fn validate(&self) -> Result<()> {
        self.spotify.validate()?;
        parse_url("lyrics.base_url", &self.lyrics.base_url)?;
        if self.http.timeout_secs == 0 {
            return Err(LyricerError::InvalidConfig("http.timeout_secs must be positive".into()));
        }
        if self.polling.fallback_delay_secs == 0 {
            return Err(LyricerError::InvalidConfig(
                "polling.fallback_delay_secs must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// OAuth provider settings for the authorization code flow.
#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(alias = "AuthURL")]
    pub authorization_url: String,
    #[serde(alias = "AccessURL")]
    pub token_url: String,
    #[serde(alias = "ClientID")]
    pub client_id: String,
    #[serde(alias = "SecretID")]
    pub client_secret: String,
    /// Must point at localhost; the callback listener binds its port and path.
    #[serde(alias = "CallbackURL")]
    pub redirect_url: String,
    /// Requested scopes, sent in this order.
    #[serde(alias = "Scopes", default)]
    pub scopes: Vec<String>,
    #[serde(default = "default_now_playing_url")]
    pub now_playing_url: String,
}

impl ProviderConfig {
    /// # Errors
    /// Returns `LyricerError::InvalidConfig` if any endpoint is not an
    /// absolute URL or the redirect URL has no host.
    pub fn validate(&self) -> Result<()> {
        parse_url("authorization_url", &self.authorization_url)?;
        parse_url("token_url", &self.token_url)?;
        parse_url("now_playing_url", &self.now_playing_url)?;
        let redirect = parse_url("redirect_url", &self.redirect_url)?;
        if redirect.host_str().is_none() {
            return Err(LyricerError::InvalidConfig("redirect_url is missing a host".into()));
        }
        if self.client_id.is_empty() {
            return Err(LyricerError::InvalidConfig("client_id is empty".into()));
        }
        Ok(())
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("authorization_url", &self.authorization_url)
            .field("token_url", &self.token_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_url", &self.redirect_url)
            .field("scopes", &self.scopes)
            .field("now_playing_url", &self.now_playing_url)
            .finish()
    }
}

/// Outgoing HTTP settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Per-request timeout for token and now-playing calls.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl HttpSettings {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self { timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingSettings {
    /// Wait applied after a failed now-playing query.
    #[serde(default = "default_fallback_delay_secs")]
    pub fallback_delay_secs: u64,
}

impl PollingSettings {
    #[must_use]
    pub fn fallback_delay(&self) -> Duration {
        Duration::from_secs(self.fallback_delay_secs)
    }
}

impl Default for PollingSettings {
    fn default() -> Self {
        Self { fallback_delay_secs: FALLBACK_DELAY_SECS }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LyricsSettings {
    #[serde(default = "default_lyrics_base_url")]
    pub base_url: String,
}

impl Default for LyricsSettings {
    fn default() -> Self {
        Self { base_url: default_lyrics_base_url() }
    }
}

fn parse_url(field: &str, value: &str) -> Result<Url> {
    Url::parse(value)
        .map_err(|err| LyricerError::InvalidConfig(format!("invalid {field} '{value}': {err}")))
}

fn default_now_playing_url() -> String {
    SPOTIFY_NOW_PLAYING_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

fn default_fallback_delay_secs() -> u64 {
    FALLBACK_DELAY_SECS
}

fn default_lyrics_base_url() -> String {
    DEFAULT_LYRICS_BASE_URL.to_string()
}
