//! Client error types.

use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced by the client. Transport failures are passed through
/// unchanged; nothing is retried.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("model error: {0}")]
    Model(#[from] wpapi_types::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("no async runtime available to fetch {0}")]
    NoRuntime(String),

    #[error("background fetch failed: {0}")]
    Join(String),
}

impl ClientError {
    /// Returns true if the remote store answered 404.
    pub fn is_not_found(&self) -> bool {
        match self {
            ClientError::Status { status, .. } => *status == 404,
            ClientError::Http(e) => e.status().is_some_and(|s| s.as_u16() == 404),
            _ => false,
        }
    }
}
