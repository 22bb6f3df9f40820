//! API configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Environment variable holding the API root URL.
pub const ROOT_ENV: &str = "WPAPI_ROOT";
/// Environment variable holding the request timeout in seconds.
pub const TIMEOUT_ENV: &str = "WPAPI_TIMEOUT_SECS";

/// Where the API lives and how requests to it are made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every entity URL hangs off (e.g. `https://example.com/wp-json`).
    pub root: String,
    /// Per-request timeout, in seconds.
    pub timeout_secs: u64,
    /// `User-Agent` header sent with each request.
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            root: "http://localhost/wp-json".to_string(),
            timeout_secs: 30,
            user_agent: concat!("wpapi/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ApiConfig {
    /// Config for `root` with default timeout and user agent. Trailing
    /// slashes are trimmed.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into().trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }

    /// Reads `WPAPI_ROOT` (required) and `WPAPI_TIMEOUT_SECS` (optional).
    pub fn from_env() -> ClientResult<Self> {
        let root = std::env::var(ROOT_ENV)
            .map_err(|_| ClientError::Config(format!("{ROOT_ENV} is not set")))?;
        let mut config = Self::new(root);
        if let Ok(raw) = std::env::var(TIMEOUT_ENV) {
            config.timeout_secs = raw.parse().map_err(|_| {
                ClientError::Config(format!(
                    "{TIMEOUT_ENV} must be a number of seconds, got {raw:?}"
                ))
            })?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations no request could succeed with.
    pub fn validate(&self) -> ClientResult<()> {
        if !(self.root.starts_with("http://") || self.root.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "root must be an http(s) URL, got {:?}",
                self.root
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ClientError::Config("timeout must be positive".to_string()));
        }
        Ok(())
    }
}
