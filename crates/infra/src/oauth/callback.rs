//! Loopback HTTP server that receives the OAuth redirect.
//!
//! Serves exactly one path. The first `GET` carrying a non-empty `code`
//! query parameter delivers that code on a one-shot channel and triggers a
//! graceful shutdown; the response is written before the listener closes.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::http::{Method, StatusCode};
use axum::response::Html;
use axum::routing::any;
use axum::Router;
use lyricer_domain::{LyricerError, Result};
use tokio::net::TcpListener;
use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::errors::InfraError;

const SUCCESS_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Authorization Complete</title></head>
<body><h1>Authorization Successful</h1><p>You can close this window and return to Lyricer.</p></body>
</html>"#;

/// Loopback server waiting for a single authorization code.
pub struct CallbackServer {
    local_addr: SocketAddr,
    code_rx: oneshot::Receiver<String>,
    handle: JoinHandle<()>,
}

#[derive(Clone)]
struct CallbackState {
    delivery: Arc<Mutex<Option<oneshot::Sender<String>>>>,
    shutdown: Arc<Mutex<Option<oneshot::Sender<()>>>>,
}

impl CallbackServer {
    /// Bind `bind_addr` and start serving `path`.
    ///
    /// # Errors
    /// Returns `LyricerError::CallbackServer` if the listener cannot be bound
    /// or `path` is not a plain absolute route.
    pub async fn start(path: &str, bind_addr: SocketAddr) -> Result<Self> {
        if !path.starts_with('/') || path.contains(['{', '}', '*', ':']) {
            return Err(LyricerError::CallbackServer(format!(
                "callback path must be a plain absolute path: {path}"
            )));
        }

        let listener = TcpListener::bind(bind_addr).await.map_err(|err| {
            LyricerError::CallbackServer(format!(
                "failed to bind callback listener on {bind_addr}: {err}"
            ))
        })?;
        let local_addr =
            listener.local_addr().map_err(|err| LyricerError::from(InfraError::from(err)))?;

        let (code_tx, code_rx) = oneshot::channel();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let state = CallbackState {
            delivery: Arc::new(Mutex::new(Some(code_tx))),
            shutdown: Arc::new(Mutex::new(Some(shutdown_tx))),
        };

        let app = Router::new().route(path, any(handle_callback)).with_state(state);

        info!(addr = %local_addr, path, "Starting callback server");
        let handle = tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await
            {
                error!(error = %err, "Callback server error");
            }
            debug!("Callback server closed");
        });

        Ok(Self { local_addr, code_rx, handle })
    }

    /// Address actually bound; differs from the requested one when port 0
    /// was asked for.
    #[must_use]
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Split into the code receiver and the server task.
    ///
    /// The task finishes on its own once a code has been delivered.
    #[must_use]
    pub fn into_parts(self) -> (oneshot::Receiver<String>, JoinHandle<()>) {
        (self.code_rx, self.handle)
    }
}

async fn handle_callback(
    State(state): State<CallbackState>,
    method: Method,
    RawQuery(query): RawQuery,
) -> (StatusCode, Html<&'static str>) {
    if method != Method::GET {
        warn!(%method, "Callback request wasn't GET");
        return (StatusCode::BAD_REQUEST, Html("Wrong request"));
    }

    let Some(code) = query.as_deref().and_then(first_code) else {
        warn!("Code not present in callback uri");
        return (StatusCode::BAD_REQUEST, Html("No code in uri"));
    };

    let Some(sender) = state.delivery.lock().await.take() else {
        debug!("Ignoring callback after the code was already delivered");
        return (StatusCode::BAD_REQUEST, Html("Authorization code already received"));
    };

    info!("Authorization code received");
    let delivered = sender.send(code).is_ok();
    if let Some(shutdown) = state.shutdown.lock().await.take() {
        let _ = shutdown.send(());
    }

    if delivered {
        (StatusCode::OK, Html(SUCCESS_PAGE))
    } else {
        warn!("Authorization code receiver was dropped");
        (StatusCode::GONE, Html("Authorization is no longer pending"))
    }
}

/// First non-empty `code` value of a raw query string.
fn first_code(query: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "code")
        .map(|(_, value)| value.into_owned())
        .filter(|code| !code.is_empty())
}
