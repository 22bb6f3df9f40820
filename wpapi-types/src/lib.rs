//! Core value types for the WordPress REST entity layer.
//!
//! This crate defines the small, resource-agnostic pieces every other crate
//! in the workspace depends on:
//! - [`Identity`] values addressing a single remote resource
//! - ISO-8601 conversion between wire strings and native timestamps
//! - The shared [`Error`] / [`Result`] pair
//!
//! Resource kinds, attribute bags and URL rules live in `wpapi-model`.

mod ids;
mod timestamp;

pub use ids::Identity;
pub use timestamp::{format_iso8601, parse_iso8601, truncate_to_millis, Timestamp};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while converting between wire and in-memory values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// The remote store answered with something other than a JSON object
    /// where an attribute bag was expected.
    #[error("unexpected wire shape: {0}")]
    UnexpectedShape(String),
}
