//! Authorization code flow orchestration.
//!
//! Both entry points return as soon as the background work is started; the
//! result arrives later on a one-shot channel.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use lyricer_common::auth::{AuthorizationRequest, TokenExchangeRequest};
use lyricer_domain::{LyricerError, ProviderConfig, Result, TokenResponse};
use reqwest::{Method, StatusCode};
use tokio::sync::oneshot;
use tracing::{debug, info, warn};
use url::{Host, Url};

use super::callback::CallbackServer;
use crate::errors::InfraError;
use crate::http::HttpClient;
use crate::platform::BrowserLauncher;

/// Drives browser consent and the code-for-token exchange.
#[derive(Clone)]
pub struct AuthCoordinator {
    http: HttpClient,
    browser: Arc<dyn BrowserLauncher>,
}

impl AuthCoordinator {
    pub fn new(http: HttpClient, browser: Arc<dyn BrowserLauncher>) -> Self {
        Self { http, browser }
    }

    /// Start the callback listener, open the consent page and return the
    /// channel the authorization code will arrive on.
    ///
    /// Does not wait for the user. A browser that fails to launch is logged
    /// together with the URL so it can be opened by hand.
    ///
    /// # Errors
    /// - `InvalidConfig` for malformed URLs or a non-local redirect host
    /// - `CallbackServer` if the redirect port cannot be bound
    pub async fn authorize(&self, config: &ProviderConfig) -> Result<oneshot::Receiver<String>> {
        let request = AuthorizationRequest::from_config(config)?;
        let (path, bind_addr) = callback_target(request.redirect_url())?;

        let server = CallbackServer::start(&path, bind_addr).await?;
        let url = request.url();

        if let Err(err) = self.browser.open(&url) {
            warn!(error = %err, %url, "Could not open the browser; open the URL manually");
        } else {
            info!("Opened authorization page in the browser");
        }

        let (code_rx, _server_task) = server.into_parts();
        Ok(code_rx)
    }

    /// Exchange `code` for tokens in the background.
    ///
    /// The receiver yields:
    /// - `AccessDenied { status, body }` for any non-200 answer
    /// - `Transport` when the endpoint cannot be reached
    /// - `Decode` when a 200 body is not a token response
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the request cannot be built.
    pub fn exchange_token(
        &self,
        config: &ProviderConfig,
        code: &str,
    ) -> Result<oneshot::Receiver<Result<TokenResponse>>> {
        let request = TokenExchangeRequest::from_config(config, code)?;
        let http = self.http.clone();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let outcome = post_token_exchange(&http, &request).await;
            if tx.send(outcome).is_err() {
                debug!("Token exchange finished after the caller stopped waiting");
            }
        });

        Ok(rx)
    }
}

async fn post_token_exchange(
    http: &HttpClient,
    request: &TokenExchangeRequest,
) -> Result<TokenResponse> {
    let mut builder = http.request(Method::POST, request.url().clone());
    for (name, value) in request.headers() {
        builder = builder.header(name, value);
    }

    let response = http.send(builder.body(request.form_body())).await?;
    let status = response.status();
    let body = response.text().await.map_err(|err| LyricerError::from(InfraError::from(err)))?;

    if status != StatusCode::OK {
        warn!(status = status.as_u16(), "Token endpoint refused the exchange");
        return Err(LyricerError::AccessDenied { status: status.as_u16(), body });
    }

    let token: TokenResponse =
        serde_json::from_str(&body).map_err(|err| LyricerError::from(InfraError::from(err)))?;
    info!(expires_in = token.expires_in, "Access token granted");
    Ok(token)
}

/// Route path and socket address the callback listener binds for
/// `redirect`.
///
/// `localhost` binds the IPv4 loopback only; IP literals are used as given.
/// A browser that resolves `localhost` to `::1` reaches the listener only
/// after falling back to `127.0.0.1`, so registering
/// `http://127.0.0.1:<port>/...` as the redirect URL avoids the lookup.
///
/// # Errors
/// Returns `InvalidConfig` for redirect URLs without a local host.
pub fn callback_target(redirect: &Url) -> Result<(String, SocketAddr)> {
    let ip = match redirect.host() {
        Some(Host::Domain(domain)) if domain.eq_ignore_ascii_case("localhost") => {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        }
        Some(Host::Ipv4(ip)) => IpAddr::V4(ip),
        Some(Host::Ipv6(ip)) => IpAddr::V6(ip),
        _ => {
            return Err(LyricerError::InvalidConfig(format!(
                "redirect URL must point at localhost or an IP address: {redirect}"
            )))
        }
    };
    let port = redirect.port_or_known_default().ok_or_else(|| {
        LyricerError::InvalidConfig(format!("redirect URL has no port: {redirect}"))
    })?;

    Ok((redirect.path().to_string(), SocketAddr::new(ip, port)))
}
