//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Request is empty")]
    EmptyRequest,

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Missing session identity: {0}")]
    MissingIdentity(&'static str),

    #[error("Missing config key: {0}")]
    MissingConfigKey(&'static str),

    #[error("Invalid value for config key {key}: {value}")]
    InvalidConfigValue { key: &'static str, value: String },
}
