//! HTTP transport over reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{ClientError, ClientResult};
use crate::transport::{Transport, WriteMode};

/// Talks JSON to the API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport honouring the config's timeout and user agent.
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an already configured reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Turns non-2xx responses into [`ClientError::Status`].
    async fn check(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> ClientResult<Value> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn save(&self, url: &str, mode: WriteMode, body: Value) -> ClientResult<Value> {
        let request = match mode {
            WriteMode::Create => {
                debug!("POST {}", url);
                self.client.post(url)
            }
            WriteMode::Update => {
                debug!("PUT {}", url);
                self.client.put(url)
            }
        };
        let response = request.json(&body).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn delete(&self, url: &str) -> ClientResult<()> {
        debug!("DELETE {}", url);
        let response = self.client.delete(url).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}
