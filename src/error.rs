//! Error types for the surprise client.

use thiserror::Error;

/// Errors returned by [`SurpriseClient`](crate::client::SurpriseClient).
///
/// Network, auth and server failures all surface as either `Http` (the
/// request never produced a status) or `RequestFailed` (it did, and it was
/// not 2xx). Nothing is retried.
#[derive(Debug, Error)]
pub enum SurpriseError {
    #[error("Failed to {operation}: {status}")]
    RequestFailed {
        operation: &'static str,
        status: String,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid bearer token: {0}")]
    InvalidToken(String),
}

pub type SurpriseResult<T> = Result<T, SurpriseError>;
