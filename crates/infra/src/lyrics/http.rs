//! Lyrics over a `GET {base}/{artist}/{title}` JSON API.
//!
//! The service answers `{"lyrics": "..."}` on success and 404 when it has no
//! entry for the song.

use async_trait::async_trait;
use lyricer_core::LyricsFetcher;
use lyricer_domain::{LyricerError, LyricsSettings, Result};
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::errors::InfraError;
use crate::http::HttpClient;

#[derive(Debug, Deserialize)]
struct LyricsBody {
    #[serde(default)]
    lyrics: String,
}

/// [`LyricsFetcher`] backed by an HTTP lyrics API.
#[derive(Clone)]
pub struct HttpLyricsFetcher {
    http: HttpClient,
    base_url: String,
}

impl HttpLyricsFetcher {
    /// # Errors
    /// Returns `InvalidConfig` if `base_url` is not an absolute URL.
    pub fn new(http: HttpClient, base_url: &str) -> Result<Self> {
        Url::parse(base_url).map_err(|err| {
            LyricerError::InvalidConfig(format!("invalid lyrics base URL '{base_url}': {err}"))
        })?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string() })
    }

    /// # Errors
    /// Returns `InvalidConfig` for a malformed `lyrics.base_url`.
    pub fn from_settings(http: HttpClient, settings: &LyricsSettings) -> Result<Self> {
        Self::new(http, &settings.base_url)
    }

    fn lookup_url(&self, artist: &str, title: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            urlencoding::encode(artist),
            urlencoding::encode(title)
        )
    }
}

#[async_trait]
impl LyricsFetcher for HttpLyricsFetcher {
    async fn fetch_lyrics(&self, artist: &str, title: &str) -> Result<String> {
        let url = self.lookup_url(artist, title);
        let response = self.http.send(self.http.request(Method::GET, url)).await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(LyricerError::LyricsNotFound);
        }
        if !status.is_success() {
            return Err(LyricerError::Lyrics(format!("lyrics service answered {status}")));
        }

        let body = response.text().await.map_err(|err| LyricerError::from(InfraError::from(err)))?;
        let parsed: LyricsBody =
            serde_json::from_str(&body).map_err(|err| LyricerError::from(InfraError::from(err)))?;

        let lyrics = parsed.lyrics.trim();
        if lyrics.is_empty() {
            return Err(LyricerError::LyricsNotFound);
        }
        Ok(lyrics.to_string())
    }
}
