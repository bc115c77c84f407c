//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Lyricer
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum LyricerError {
    /// Malformed URLs or configuration documents.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Network failure while talking to a remote endpoint.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The token endpoint answered with a non-200 status.
    ///
    /// `body` is kept verbatim for diagnostics.
    #[error("Access denied with status {status}: {body}")]
    AccessDenied { status: u16, body: String },

    /// Nothing is currently playing.
    #[error("Response returned empty value")]
    EmptyResourceState,

    /// A payload could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// The local callback listener could not be started.
    #[error("Callback server error: {0}")]
    CallbackServer(String),

    /// An operation was invoked before the session reached the state it needs.
    #[error("Invalid session state: {0}")]
    InvalidState(String),

    /// A provider API answered with a status the caller cannot interpret.
    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Lyrics for the requested song couldn't be found")]
    LyricsNotFound,

    #[error("Lyrics error: {0}")]
    Lyrics(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Lyricer operations
pub type Result<T> = std::result::Result<T, LyricerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_denied_keeps_raw_body_in_message() {
        let err = LyricerError::AccessDenied { status: 403, body: "denied".to_string() };
        assert_eq!(err.to_string(), "Access denied with status 403: denied");
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(LyricerError::Transport("timeout".into())).unwrap();
        assert_eq!(json["type"], "Transport");
        assert_eq!(json["message"], "timeout");
    }
}
