//! Remote config over HTTP
//!
//! `GET <base>/v1/configs/` returns `{"config": {...}}`. Anything other than
//! a 2xx status is reported as [`ConfigFetchError::HttpStatus`] and the body
//! is ignored.

use async_trait::async_trait;
use chat_application::ports::config_provider::{ConfigFetchError, ConfigProvider};
use chat_domain::{ApiEndpoints, ConfigEnvelope, RemoteConfig};
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// [`ConfigProvider`] backed by the config endpoint
pub struct HttpConfigProvider {
    client: reqwest::Client,
    url: String,
}

impl HttpConfigProvider {
    pub fn new(url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");
        Self::with_client(client, url)
    }

    pub fn for_endpoints(endpoints: &ApiEndpoints) -> Self {
        Self::new(endpoints.config_url())
    }

    /// Use a preconfigured client (proxies, custom timeouts).
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ConfigProvider for HttpConfigProvider {
    async fn fetch(&self) -> Result<RemoteConfig, ConfigFetchError> {
        debug!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ConfigFetchError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConfigFetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ConfigFetchError::RequestFailed(e.to_string()))?;

        let envelope: ConfigEnvelope = serde_json::from_slice(&body)
            .map_err(|e| ConfigFetchError::Malformed(e.to_string()))?;

        Ok(envelope.config)
    }
}
