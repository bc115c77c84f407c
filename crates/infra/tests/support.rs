//! Shared helpers for `lyricer-infra` integration tests.

#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use lyricer_domain::{LyricerError, Result as DomainResult, Session, TokenResponse};
use lyricer_infra::platform::BrowserLauncher;
use url::Url;

/// Port that was free a moment ago.
pub fn free_local_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("ephemeral port should bind");
    listener.local_addr().expect("bound listener has an address").port()
}

/// Stands in for the user's browser: instead of showing the consent page it
/// immediately follows the redirect with the configured code.
pub struct ApprovingBrowser {
    code: String,
    opened: Mutex<Vec<Url>>,
}

impl ApprovingBrowser {
    pub fn new(code: &str) -> Arc<Self> {
        Arc::new(Self { code: code.to_string(), opened: Mutex::new(Vec::new()) })
    }

    pub fn opened(&self) -> Vec<Url> {
        self.opened.lock().unwrap().clone()
    }
}

impl BrowserLauncher for ApprovingBrowser {
    fn open(&self, url: &Url) -> DomainResult<()> {
        self.opened.lock().unwrap().push(url.clone());

        let redirect = url
            .query_pairs()
            .find(|(key, _)| key == "redirect_uri")
            .map(|(_, value)| value.into_owned())
            .expect("authorization URL carries redirect_uri");
        let mut callback = Url::parse(&redirect).expect("redirect_uri is a URL");
        callback.query_pairs_mut().append_pair("code", &self.code);

        tokio::spawn(async move {
            let _ = reqwest::get(callback).await;
        });
        Ok(())
    }
}

/// Browser that can never be launched.
pub struct BrokenBrowser;

impl BrowserLauncher for BrokenBrowser {
    fn open(&self, _url: &Url) -> DomainResult<()> {
        Err(LyricerError::Internal("no browser available".into()))
    }
}

/// Session that already holds an access token.
pub fn granted_session(access_token: &str) -> Session {
    let mut session = Session::new();
    session.record_code("granted-code".to_string()).unwrap();
    let token = TokenResponse {
        access_token: access_token.to_string(),
        token_type: "Bearer".to_string(),
        expires_in: 3600,
        refresh_token: None,
        scope: None,
    };
    session.record_grant(&token, Utc::now()).unwrap();
    session
}

/// Session that holds only an authorization code.
pub fn authorized_session(code: &str) -> Session {
    let mut session = Session::new();
    session.record_code(code.to_string()).unwrap();
    session
}
