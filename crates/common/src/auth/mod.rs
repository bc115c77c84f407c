//! OAuth 2.0 authorization code flow primitives
//!
//! This module builds the two HTTP requests of the authorization code flow
//! for confidential clients that authenticate to the token endpoint with
//! HTTP Basic credentials.
//!
//! # Flow
//!
//! ```text
//! ProviderConfig ──► AuthorizationRequest::url()   (opened in the browser)
//!                          │
//!                 browser redirect ?code=…
//!                          │
//!                          ▼
//!                TokenExchangeRequest { code }     (POSTed to the token URL)
//! ```
//!
//! # Usage Example
//!
//! ```
//! use lyricer_common::auth::{AuthorizationRequest, TokenExchangeRequest};
//!
//! let auth = AuthorizationRequest::new(
//!     "https://accounts.spotify.com/authorize",
//!     "client_id",
//!     "http://localhost:8888/callback",
//!     vec!["user-read-currently-playing".to_string()],
//! )?;
//! println!("Open this URL in your browser: {}", auth.url());
//!
//! let exchange = TokenExchangeRequest::new(
//!     "https://accounts.spotify.com/api/token",
//!     "client_id",
//!     "client_secret",
//!     "code-from-callback",
//!     "http://localhost:8888/callback",
//! )?;
//! assert!(exchange.authorization_header_value().starts_with("Basic "));
//! # Ok::<(), lyricer_domain::LyricerError>(())
//! ```

pub mod request;

pub use request::{
    authorization_header_value, decode_basic_credentials, AuthorizationRequest,
    TokenExchangeRequest, FORM_CONTENT_TYPE,
};
