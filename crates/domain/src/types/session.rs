//! Provider session state
//!
//! A session only moves forward: `Unauthenticated → AuthorizationPending →
//! Authorized → AccessGranted`. Failed transitions leave it untouched.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::token::TokenResponse;
use crate::errors::{LyricerError, Result};

/// Position of a session in the authorization code flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AuthState {
    Unauthenticated,
    AuthorizationPending,
    Authorized,
    AccessGranted,
}

/// Credentials obtained from the provider during the current run.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pending: bool,
    pub authorization_code: Option<String>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> AuthState {
        if self.access_token.is_some() {
            AuthState::AccessGranted
        } else if self.authorization_code.is_some() {
            AuthState::Authorized
        } else if self.pending {
            AuthState::AuthorizationPending
        } else {
            AuthState::Unauthenticated
        }
    }

    /// Mark that a browser consent is in flight.
    ///
    /// # Errors
    /// Fails with `InvalidState` once a code has already been obtained.
    pub fn begin_authorization(&mut self) -> Result<()> {
        if self.state() > AuthState::AuthorizationPending {
            return Err(LyricerError::InvalidState(format!(
                "authorization already completed (state {:?})",
                self.state()
            )));
        }
        self.pending = true;
        Ok(())
    }

    /// Store the authorization code delivered by the callback.
    ///
    /// # Errors
    /// Fails with `InvalidState` if access was already granted.
    pub fn record_code(&mut self, code: String) -> Result<()> {
        if self.state() == AuthState::AccessGranted {
            return Err(LyricerError::InvalidState(
                "access already granted; refusing to replace the authorization code".into(),
            ));
        }
        self.pending = false;
        self.authorization_code = Some(code);
        Ok(())
    }

    /// Store the token grant, computing `expires_at = now + expires_in`.
    ///
    /// # Errors
    /// Fails with `InvalidState` if no authorization code is held.
    pub fn record_grant(&mut self, token: &TokenResponse, now: DateTime<Utc>) -> Result<()> {
        if self.authorization_code.is_none() {
            return Err(LyricerError::InvalidState(
                "cannot store an access token without an authorization code".into(),
            ));
        }
        let lifetime = i64::try_from(token.expires_in).unwrap_or(i64::MAX);
        self.access_token = Some(token.access_token.clone());
        self.refresh_token.clone_from(&token.refresh_token);
        self.expires_at =
            Duration::try_seconds(lifetime).and_then(|ttl| now.checked_add_signed(ttl));
        Ok(())
    }

    /// The authorization code, if the session is at least `Authorized`.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.authorization_code.as_deref()
    }

    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state())
            .field("has_code", &self.authorization_code.is_some())
            .field("has_access_token", &self.access_token.is_some())
            .field("has_refresh_token", &self.refresh_token.is_some())
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn token(expires_in: u64) -> TokenResponse {
        TokenResponse {
            access_token: "access".into(),
            token_type: "Bearer".into(),
            expires_in,
            refresh_token: Some("refresh".into()),
            scope: None,
        }
    }

    #[test]
    fn walks_states_in_order() {
        let mut session = Session::new();
        assert_eq!(session.state(), AuthState::Unauthenticated);

        session.begin_authorization().unwrap();
        assert_eq!(session.state(), AuthState::AuthorizationPending);

        session.record_code("code".into()).unwrap();
        assert_eq!(session.state(), AuthState::Authorized);
        assert_eq!(session.code(), Some("code"));

        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        session.record_grant(&token(3600), now).unwrap();
        assert_eq!(session.state(), AuthState::AccessGranted);
        assert_eq!(session.access_token(), Some("access"));
        assert_eq!(session.refresh_token.as_deref(), Some("refresh"));
        assert_eq!(session.expires_at, Some(now + Duration::seconds(3600)));
    }

    #[test]
    fn grant_without_code_is_rejected_and_leaves_session_untouched() {
        let mut session = Session::new();
        let before = session.clone();

        let err = session.record_grant(&token(60), Utc::now()).unwrap_err();
        assert!(matches!(err, LyricerError::InvalidState(_)));
        assert_eq!(session, before);
    }

    #[test]
    fn never_rolls_back_after_grant() {
        let mut session = Session::new();
        session.record_code("code".into()).unwrap();
        session.record_grant(&token(60), Utc::now()).unwrap();

        assert!(session.begin_authorization().is_err());
        assert!(session.record_code("other".into()).is_err());
        assert_eq!(session.code(), Some("code"));
    }

    #[test]
    fn debug_hides_token_values() {
        let mut session = Session::new();
        session.record_code("super-secret-code".into()).unwrap();
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("super-secret-code"));
        assert!(rendered.contains("Authorized"));
    }
}
