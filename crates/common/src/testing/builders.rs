//! Test data builders with fluent API

// Allow missing panics docs for test builders - methods are designed to be infallible
// in test contexts and any panics indicate test setup errors
#![allow(clippy::missing_panics_doc)]

use lyricer_domain::ProviderConfig;

/// Builds a [`ProviderConfig`] whose endpoints all live on one mock server.
///
/// Paths mirror the real provider: `/authorize`, `/api/token` and
/// `/v1/me/player/currently-playing`.
#[derive(Debug, Clone)]
pub struct ProviderConfigBuilder {
    config: ProviderConfig,
}

impl ProviderConfigBuilder {
    #[must_use]
    pub fn for_server(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            config: ProviderConfig {
                authorization_url: format!("{base}/authorize"),
                token_url: format!("{base}/api/token"),
                client_id: "test-client".to_string(),
                client_secret: "test-secret".to_string(),
                redirect_url: "http://127.0.0.1:0/callback".to_string(),
                scopes: Vec::new(),
                now_playing_url: format!("{base}/v1/me/player/currently-playing"),
            },
        }
    }

    #[must_use]
    pub fn credentials(mut self, client_id: &str, client_secret: &str) -> Self {
        self.config.client_id = client_id.to_string();
        self.config.client_secret = client_secret.to_string();
        self
    }

    #[must_use]
    pub fn redirect_url(mut self, redirect_url: &str) -> Self {
        self.config.redirect_url = redirect_url.to_string();
        self
    }

    #[must_use]
    pub fn scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn build(self) -> ProviderConfig {
        self.config
    }
}
