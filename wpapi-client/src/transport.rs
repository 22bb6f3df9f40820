//! Transport abstraction.
//!
//! The client derives URLs and bodies; a transport only moves JSON. Results
//! and failures are handed back to the caller uninspected.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ClientResult;

/// Whether a save creates a new resource or updates an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// The entity has no identity yet; `POST` to its collection URL.
    Create,
    /// `PUT` to the entity's own URL.
    Update,
}

/// Moves JSON to and from the remote store.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Reads the resource at `url`.
    async fn fetch(&self, url: &str) -> ClientResult<Value>;

    /// Writes `body` to `url` and returns the stored representation.
    async fn save(&self, url: &str, mode: WriteMode, body: Value) -> ClientResult<Value>;

    /// Deletes the resource at `url`.
    async fn delete(&self, url: &str) -> ClientResult<()>;
}
