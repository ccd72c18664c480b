//! Config provider port
//!
//! Fetches the remote configuration displayed in the config panel.

use async_trait::async_trait;
use chat_domain::{DomainError, RemoteConfig};
use thiserror::Error;

/// Errors that can occur while fetching the remote configuration
#[derive(Error, Debug)]
pub enum ConfigFetchError {
    #[error("Config request failed: {0}")]
    RequestFailed(String),

    #[error("Config endpoint returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Malformed config response: {0}")]
    Malformed(String),

    #[error("Unusable config: {0}")]
    Invalid(#[from] DomainError),
}

/// Source of remote configuration
#[async_trait]
pub trait ConfigProvider: Send + Sync {
    async fn fetch(&self) -> Result<RemoteConfig, ConfigFetchError>;
}
