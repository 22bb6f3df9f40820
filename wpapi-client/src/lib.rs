//! Async client for WordPress REST API entities.
//!
//! Builds on `wpapi-model`: the model decides URLs, codecs and access; this
//! crate moves the resulting JSON through a [`Transport`].
//!
//! - [`Client`] fetches, saves and deletes entities and resolves parents
//! - [`HttpTransport`] is the reqwest-backed transport
//! - [`ApiConfig`] holds the API root and request settings
//!
//! # Example
//!
//! ```no_run
//! use wpapi_client::{ApiConfig, Client};
//! use wpapi_model::EntityKind;
//!
//! # async fn run() -> wpapi_client::ClientResult<()> {
//! let client = Client::new(ApiConfig::new("https://example.com/wp-json"))?;
//! let post = client.get(EntityKind::Post, 42i64).await?;
//! println!("{:?}", post.get_str("title"));
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod http;
mod transport;

pub use client::{Client, Parent, PendingParent, WriteOutcome};
pub use config::{ApiConfig, ROOT_ENV, TIMEOUT_ENV};
pub use error::{ClientError, ClientResult};
pub use http::HttpTransport;
pub use transport::{Transport, WriteMode};
