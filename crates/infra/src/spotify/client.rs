//! Spotify provider client
//!
//! Owns the [`Session`] and is the only writer of it. Background tasks
//! spawned here update the session before forwarding their result, so a
//! value received from [`SpotifyClient::authorize`] or
//! [`SpotifyClient::access`] is already reflected in [`SpotifyClient::state`].

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use lyricer_core::NowPlayingSource;
use lyricer_domain::{AuthState, LyricerError, NowPlaying, ProviderConfig, Result, Session};
use reqwest::{Method, StatusCode};
use tokio::sync::{oneshot, RwLock};
use tracing::{debug, info, warn};

use super::now_playing::parse_now_playing;
use crate::errors::InfraError;
use crate::http::HttpClient;
use crate::oauth::AuthCoordinator;
use crate::platform::BrowserLauncher;

/// Authorization code flow plus the currently-playing query.
pub struct SpotifyClient {
    config: Arc<ProviderConfig>,
    coordinator: AuthCoordinator,
    http: HttpClient,
    session: Arc<RwLock<Session>>,
}

impl SpotifyClient {
    pub fn new(
        config: ProviderConfig,
        http: HttpClient,
        browser: Arc<dyn BrowserLauncher>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            coordinator: AuthCoordinator::new(http.clone(), browser),
            http,
            session: Arc::new(RwLock::new(Session::new())),
        }
    }

    /// Resume from an existing session.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Arc::new(RwLock::new(session));
        self
    }

    pub async fn state(&self) -> AuthState {
        self.session.read().await.state()
    }

    /// Copy of the current session.
    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    /// Begin browser consent.
    ///
    /// Returns once the callback listener is up; the code arrives on the
    /// receiver after the user approves. The receiver closes without a value
    /// if the listener stops first.
    ///
    /// # Errors
    /// - `InvalidState` once a code has been obtained
    /// - whatever [`AuthCoordinator::authorize`] reports
    pub async fn authorize(&self) -> Result<oneshot::Receiver<String>> {
        let state = self.state().await;
        if state > AuthState::AuthorizationPending {
            return Err(LyricerError::InvalidState(format!(
                "authorization already completed (state {state:?})"
            )));
        }

        let code_rx = self.coordinator.authorize(&self.config).await?;
        self.session.write().await.begin_authorization()?;

        let session = Arc::clone(&self.session);
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let Ok(code) = code_rx.await else {
                warn!("Callback server stopped before delivering a code");
                return;
            };
            if let Err(err) = session.write().await.record_code(code.clone()) {
                warn!(error = %err, "Discarding authorization code");
                return;
            }
            info!("Spotify authorized");
            if tx.send(code).is_err() {
                debug!("Authorization code stored; nobody is waiting for it");
            }
        });

        Ok(rx)
    }

    /// Exchange the held authorization code for an access token.
    ///
    /// The receiver yields the access token. On failure the session is left
    /// exactly as it was.
    ///
    /// # Errors
    /// `InvalidState` unless the session is `Authorized`.
    pub async fn access(&self) -> Result<oneshot::Receiver<Result<String>>> {
        let code = {
            let session = self.session.read().await;
            match (session.state(), session.code()) {
                (AuthState::Authorized, Some(code)) => code.to_string(),
                (state, _) => {
                    return Err(LyricerError::InvalidState(format!(
                        "access requires an authorization code (state {state:?})"
                    )))
                }
            }
        };

        let token_rx = self.coordinator.exchange_token(&self.config, &code)?;
        let session = Arc::clone(&self.session);
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let outcome = match token_rx.await {
                Ok(Ok(token)) => session
                    .write()
                    .await
                    .record_grant(&token, Utc::now())
                    .map(|()| token.access_token),
                Ok(Err(err)) => Err(err),
                Err(_) => {
                    Err(LyricerError::Internal("token exchange ended without a result".into()))
                }
            };
            match &outcome {
                Ok(_) => info!("Spotify access granted"),
                Err(err) => warn!(error = %err, "Spotify access failed"),
            }
            let _ = tx.send(outcome);
        });

        Ok(rx)
    }

    /// Refreshing an expired token.
    ///
    /// # Errors
    /// Always `UnsupportedOperation`.
    pub fn refresh(&self) -> Result<()> {
        Err(LyricerError::UnsupportedOperation(
            "refreshing the access token is not supported".into(),
        ))
    }

    /// Query what the user is currently listening to.
    ///
    /// # Errors
    /// - `InvalidState` before access was granted
    /// - `EmptyResourceState` for `204 No Content` or an empty item
    /// - `UnexpectedStatus` for other non-2xx answers
    /// - `Transport` / `Decode` as reported by the HTTP layer
    pub async fn current_resource_state(&self) -> Result<NowPlaying> {
        let token = self
            .session
            .read()
            .await
            .access_token()
            .map(str::to_owned)
            .ok_or_else(|| {
                LyricerError::InvalidState("now-playing query requires an access token".into())
            })?;

        let request =
            self.http.request(Method::GET, self.config.now_playing_url.as_str()).bearer_auth(token);
        let response = self.http.send(request).await?;
        let status = response.status();

        if status == StatusCode::NO_CONTENT {
            return Err(LyricerError::EmptyResourceState);
        }

        let body = response.text().await.map_err(|err| LyricerError::from(InfraError::from(err)))?;
        if !status.is_success() {
            return Err(LyricerError::UnexpectedStatus { status: status.as_u16(), body });
        }

        let playing = parse_now_playing(&body)?;
        debug!(
            artist = %playing.artist,
            title = %playing.title,
            remaining_ms = playing.remaining.as_millis(),
            "Currently playing"
        );
        Ok(playing)
    }
}

#[async_trait]
impl NowPlayingSource for SpotifyClient {
    async fn current_resource_state(&self) -> Result<NowPlaying> {
        Self::current_resource_state(self).await
    }
}
