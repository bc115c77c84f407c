//! Conversions from external infrastructure errors into domain errors.

use std::io::Error as IoError;

use lyricer_domain::LyricerError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub LyricerError);

impl From<InfraError> for LyricerError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<LyricerError> for InfraError {
    fn from(value: LyricerError) -> Self {
        Self(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoLyricerError {
    fn into_lyricer(self) -> LyricerError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → LyricerError */
/* -------------------------------------------------------------------------- */

impl IntoLyricerError for HttpError {
    fn into_lyricer(self) -> LyricerError {
        if self.is_timeout() {
            return LyricerError::Transport("HTTP request timed out".into());
        }

        if self.is_connect() {
            return LyricerError::Transport(format!("HTTP connection failure: {self}"));
        }

        if self.is_decode() {
            return LyricerError::Decode(self.to_string());
        }

        if self.is_builder() {
            return LyricerError::InvalidConfig(format!("invalid HTTP request: {self}"));
        }

        if let Some(status) = self.status() {
            return LyricerError::UnexpectedStatus {
                status: status.as_u16(),
                body: status.canonical_reason().unwrap_or("unknown status").to_string(),
            };
        }

        LyricerError::Transport(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        Self(value.into_lyricer())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → LyricerError */
/* -------------------------------------------------------------------------- */

impl IntoLyricerError for JsonError {
    fn into_lyricer(self) -> LyricerError {
        LyricerError::Decode(format!(
            "invalid JSON at line {} column {}: {self}",
            self.line(),
            self.column()
        ))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        Self(value.into_lyricer())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → LyricerError */
/* -------------------------------------------------------------------------- */

impl IntoLyricerError for IoError {
    fn into_lyricer(self) -> LyricerError {
        use std::io::ErrorKind;

        match self.kind() {
            ErrorKind::AddrInUse | ErrorKind::AddrNotAvailable | ErrorKind::PermissionDenied => {
                LyricerError::CallbackServer(format!("cannot bind callback listener: {self}"))
            }
            _ => LyricerError::Internal(format!("I/O error: {self}")),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        Self(value.into_lyricer())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
