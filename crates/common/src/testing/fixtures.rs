//! Canned provider response bodies

use serde_json::{json, Value};

/// Token endpoint success body.
#[must_use]
pub fn token_body(access_token: &str, expires_in: u64) -> Value {
    json!({
        "access_token": access_token,
        "token_type": "Bearer",
        "expires_in": expires_in,
        "refresh_token": "refresh-token",
        "scope": "user-read-currently-playing"
    })
}

/// Currently-playing body with a single track.
///
/// `artists` is rendered in order; pass an empty slice to simulate a
/// local file or podcast episode without artist metadata.
#[must_use]
pub fn now_playing_body(
    artists: &[&str],
    title: &str,
    duration_ms: u64,
    progress_ms: u64,
    is_playing: bool,
) -> Value {
    let artists: Vec<Value> = artists.iter().map(|name| json!({ "name": name })).collect();
    json!({
        "timestamp": 1_700_000_000_000_u64,
        "progress_ms": progress_ms,
        "is_playing": is_playing,
        "currently_playing_type": "track",
        "item": {
            "name": title,
            "duration_ms": duration_ms,
            "artists": artists
        }
    })
}
