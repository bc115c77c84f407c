//! OAuth 2.0 authorization code flow request builders
//!
//! Pure functions that turn provider configuration into the two requests of
//! the flow:
//! - the browser authorization URL (RFC 6749 §4.1.1)
//! - the token exchange POST with HTTP Basic client authentication
//!   (RFC 6749 §4.1.3 and §2.3.1)
//!
//! Nothing here performs I/O.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use lyricer_domain::{LyricerError, ProviderConfig, Result};
use url::form_urlencoded;
use url::Url;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Data needed to send the user to the provider's consent page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRequest {
    authorization_url: Url,
    client_id: String,
    redirect_uri: String,
    redirect_url: Url,
    scopes: Vec<String>,
}

impl AuthorizationRequest {
    /// Parse both URLs and capture the request parameters.
    ///
    /// # Errors
    /// Returns `LyricerError::InvalidConfig` if either URL is malformed.
    pub fn new(
        authorization_url: &str,
        client_id: impl Into<String>,
        redirect_uri: &str,
        scopes: Vec<String>,
    ) -> Result<Self> {
        Ok(Self {
            authorization_url: parse("authorization", authorization_url)?,
            client_id: client_id.into(),
            redirect_uri: redirect_uri.to_string(),
            redirect_url: parse("redirect", redirect_uri)?,
            scopes,
        })
    }

    /// # Errors
    /// Returns `LyricerError::InvalidConfig` for malformed configured URLs.
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        Self::new(
            &config.authorization_url,
            config.client_id.clone(),
            &config.redirect_url,
            config.scopes.clone(),
        )
    }

    /// Fully-qualified authorization URL.
    ///
    /// Query: `response_type=code`, `client_id`, `redirect_uri`, then one
    /// `scope` pair per configured scope in configuration order. Any query
    /// already present on the configured endpoint is replaced.
    #[must_use]
    pub fn url(&self) -> Url {
        let mut url = self.authorization_url.clone();
        url.set_query(None);
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("response_type", "code")
                .append_pair("client_id", &self.client_id)
                .append_pair("redirect_uri", &self.redirect_uri);
            for scope in &self.scopes {
                query.append_pair("scope", scope);
            }
        }
        url
    }

    /// Parsed redirect URL; the callback listener binds its host, port and path.
    #[must_use]
    pub fn redirect_url(&self) -> &Url {
        &self.redirect_url
    }

    #[must_use]
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }
}

/// Data needed to trade an authorization code for an access token.
///
/// The redirect URI must be byte-identical to the one sent in the
/// authorization request; the provider rejects the exchange otherwise.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenExchangeRequest {
    token_url: Url,
    client_id: String,
    client_secret: String,
    code: String,
    redirect_uri: String,
}

impl TokenExchangeRequest {
    /// # Errors
    /// Returns `LyricerError::InvalidConfig` if either URL is malformed.
    pub fn new(
        token_url: &str,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        code: impl Into<String>,
        redirect_uri: &str,
    ) -> Result<Self> {
        parse("redirect", redirect_uri)?;
        Ok(Self {
            token_url: parse("token", token_url)?,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            code: code.into(),
            redirect_uri: redirect_uri.to_string(),
        })
    }

    /// # Errors
    /// Returns `LyricerError::InvalidConfig` for malformed configured URLs.
    pub fn from_config(config: &ProviderConfig, code: impl Into<String>) -> Result<Self> {
        Self::new(
            &config.token_url,
            config.client_id.clone(),
            config.client_secret.clone(),
            code,
            &config.redirect_url,
        )
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.token_url
    }

    /// Form fields in wire order.
    #[must_use]
    pub fn form_params(&self) -> [(&'static str, &str); 3] {
        [
            ("grant_type", "authorization_code"),
            ("code", &self.code),
            ("redirect_uri", &self.redirect_uri),
        ]
    }

    /// `application/x-www-form-urlencoded` request body.
    #[must_use]
    pub fn form_body(&self) -> String {
        form_urlencoded::Serializer::new(String::new()).extend_pairs(self.form_params()).finish()
    }

    #[must_use]
    pub fn authorization_header_value(&self) -> String {
        authorization_header_value(&self.client_id, &self.client_secret)
    }

    /// Headers to attach to the POST.
    #[must_use]
    pub fn headers(&self) -> [(&'static str, String); 2] {
        [
            ("Authorization", self.authorization_header_value()),
            ("Content-Type", FORM_CONTENT_TYPE.to_string()),
        ]
    }
}

impl std::fmt::Debug for TokenExchangeRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenExchangeRequest")
            .field("token_url", &self.token_url.as_str())
            .field("client_id", &self.client_id)
            .field("redirect_uri", &self.redirect_uri)
            .finish_non_exhaustive()
    }
}

/// `Basic base64("{client_id}:{client_secret}")`
#[must_use]
pub fn authorization_header_value(client_id: &str, client_secret: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{client_id}:{client_secret}")))
}

/// Inverse of [`authorization_header_value`].
///
/// Splits on the first `:`, so the client id must not contain one.
#[must_use]
pub fn decode_basic_credentials(header_value: &str) -> Option<(String, String)> {
    let encoded = header_value.strip_prefix("Basic ")?;
    let decoded = String::from_utf8(STANDARD.decode(encoded).ok()?).ok()?;
    let (id, secret) = decoded.split_once(':')?;
    Some((id.to_string(), secret.to_string()))
}

fn parse(kind: &str, value: &str) -> Result<Url> {
    Url::parse(value)
        .map_err(|err| LyricerError::InvalidConfig(format!("invalid {kind} URL '{value}': {err}")))
}
