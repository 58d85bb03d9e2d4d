//! Errors surfaced by [`AuthClient`](crate::AuthClient) operations.
//!
//! The taxonomy is deliberately flat. The page shows whatever message the
//! platform sent, so there is no local classification of failure kinds
//! beyond "the platform said no", "the request never completed", and "the
//! response made no sense".

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// An identity platform operation failed.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The platform rejected the request. Carries the platform's own
    /// message, e.g. `EMAIL_EXISTS` or `INVALID_LOGIN_CREDENTIALS`.
    #[error("{0}")]
    Provider(String),

    /// The request never reached the platform or the connection dropped.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The platform answered 2xx with a body that does not match the
    /// documented shape.
    #[error("unexpected response from identity platform: {0}")]
    Response(String),

    /// An operation that needs a signed-in user was called without one.
    #[error("no signed-in user")]
    NoCurrentUser,
}

/// Error envelope the platform wraps every failure in:
/// `{"error": {"code": 400, "message": "EMAIL_EXISTS", ...}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl AuthError {
    /// Decode a non-2xx response body into [`AuthError::Provider`].
    ///
    /// Bodies that are not the documented envelope fall back to the HTTP
    /// status line.
    pub(crate) fn from_error_body(status: StatusCode, body: &str) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => Self::Provider(envelope.error.message),
            Err(_) => Self::Provider(format!("HTTP {status}")),
        }
    }
}
