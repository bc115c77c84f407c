//! Integration tests for auth module
//!
//! Tests authorization URL construction and the token exchange request
//! against provider configuration read from legacy JSON.

#![cfg(feature = "platform")]

use lyricer_common::auth::{
    authorization_header_value, decode_basic_credentials, AuthorizationRequest,
    TokenExchangeRequest, FORM_CONTENT_TYPE,
};
use lyricer_domain::LyricerConfig;

const CONFIG_JSON: &str = r#"{
    "Spotify": {
        "AuthURL": "https://accounts.spotify.com/authorize",
        "AccessURL": "https://accounts.spotify.com/api/token",
        "ClientID": "0123456789abcdef",
        "SecretID": "fedcba9876543210",
        "CallbackURL": "http://localhost:8888/callback",
        "Scopes": ["user-read-currently-playing", "user-read-playback-state"]
    }
}"#;

fn config() -> LyricerConfig {
    serde_json::from_str(CONFIG_JSON).expect("fixture config parses")
}

/// Validates that the consent URL built from configuration carries every
/// parameter the provider requires, in order.
///
/// # Test Steps
/// 1. Load provider settings from legacy PascalCase JSON
/// 2. Build the authorization request
/// 3. Verify endpoint, query order and the raw redirect URI
#[test]
fn test_authorization_url_from_config() {
    let request = AuthorizationRequest::from_config(&config().spotify).expect("request builds");
    let url = request.url();

    assert_eq!(url.scheme(), "https");
    assert_eq!(url.host_str(), Some("accounts.spotify.com"));
    assert_eq!(url.path(), "/authorize");

    let keys: Vec<String> = url.query_pairs().map(|(key, _)| key.into_owned()).collect();
    assert_eq!(keys, ["response_type", "client_id", "redirect_uri", "scope", "scope"]);

    let redirect = url
        .query_pairs()
        .find(|(key, _)| key == "redirect_uri")
        .map(|(_, value)| value.into_owned());
    assert_eq!(redirect.as_deref(), Some("http://localhost:8888/callback"));
    assert_eq!(request.redirect_url().port(), Some(8888));
    assert_eq!(request.redirect_url().path(), "/callback");
}

/// Validates that the token exchange request authenticates with HTTP Basic
/// credentials and echoes the redirect URI used for consent.
///
/// # Test Steps
/// 1. Build the exchange request for a code received on the callback
/// 2. Decode the `Authorization` header back into the client credentials
/// 3. Verify the form body fields
#[test]
fn test_token_exchange_from_config() {
    let config = config();
    let request =
        TokenExchangeRequest::from_config(&config.spotify, "AQD-code").expect("request builds");

    let headers = request.headers();
    let authorization = headers
        .iter()
        .find(|(name, _)| *name == "Authorization")
        .map(|(_, value)| value.as_str())
        .expect("authorization header present");
    assert_eq!(
        decode_basic_credentials(authorization),
        Some(("0123456789abcdef".to_string(), "fedcba9876543210".to_string()))
    );
    assert!(headers
        .iter()
        .any(|(name, value)| *name == "Content-Type" && value == FORM_CONTENT_TYPE));

    let fields: Vec<(String, String)> =
        url::form_urlencoded::parse(request.form_body().as_bytes()).into_owned().collect();
    assert_eq!(
        fields,
        vec![
            ("grant_type".to_string(), "authorization_code".to_string()),
            ("code".to_string(), "AQD-code".to_string()),
            ("redirect_uri".to_string(), config.spotify.redirect_url.clone()),
        ]
    );
}

/// Validates that the free-standing header helper agrees with the request
/// method for the same credentials.
#[test]
fn test_header_helper_matches_request() {
    let config = config();
    let request =
        TokenExchangeRequest::from_config(&config.spotify, "code").expect("request builds");

    assert_eq!(
        request.authorization_header_value(),
        authorization_header_value(&config.spotify.client_id, &config.spotify.client_secret)
    );
}
