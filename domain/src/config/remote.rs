//! Remote configuration published by the config service.

use super::config_key::{CONTEXT_CHAT_COUNT, CONTEXT_LOG_COUNT, MODEL_NAME};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response body of the config endpoint: `{"config": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigEnvelope {
    pub config: RemoteConfig,
}

/// Dotted-key configuration map (Value Object)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteConfig {
    values: BTreeMap<String, serde_json::Value>,
}

impl RemoteConfig {
    pub fn from_values(values: BTreeMap<String, serde_json::Value>) -> Self {
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn model_name(&self) -> Result<&str, DomainError> {
        self.string(MODEL_NAME)
    }

    pub fn context_log_count(&self) -> Result<i64, DomainError> {
        self.integer(CONTEXT_LOG_COUNT)
    }

    pub fn context_chat_count(&self) -> Result<i64, DomainError> {
        self.integer(CONTEXT_CHAT_COUNT)
    }

    fn string(&self, key: &'static str) -> Result<&str, DomainError> {
        let value = self.get(key).ok_or(DomainError::MissingConfigKey(key))?;
        value.as_str().ok_or_else(|| DomainError::InvalidConfigValue {
            key,
            value: value.to_string(),
        })
    }

    /// Integers arrive either as JSON numbers or as numeric strings.
    fn integer(&self, key: &'static str) -> Result<i64, DomainError> {
        let value = self.get(key).ok_or(DomainError::MissingConfigKey(key))?;
        value
            .as_i64()
            .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
            .ok_or_else(|| DomainError::InvalidConfigValue {
                key,
                value: value.to_string(),
            })
    }
}

/// Context window settings shown when a session identity is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextWindow {
    pub log_count: i64,
    pub chat_count: i64,
}

/// What the config panel displays (Value Object)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPanel {
    pub model_name: String,
    /// `None` when no user context is available.
    pub context: Option<ContextWindow>,
}

impl ConfigPanel {
    /// Build the panel; context counts are only read when `has_identity`.
    pub fn from_remote(config: &RemoteConfig, has_identity: bool) -> Result<Self, DomainError> {
        let model_name = config.model_name()?.to_string();
        let context = if has_identity {
            Some(ContextWindow {
                log_count: config.context_log_count()?,
                chat_count: config.context_chat_count()?,
            })
        } else {
            None
        };
        Ok(Self {
            model_name,
            context,
        })
    }

    /// Second panel line.
    pub fn context_line(&self) -> String {
        match self.context {
            Some(window) => format!(
                "Reading {} most recent logs and {} most recent chats",
                window.log_count, window.chat_count
            ),
            None => "No user context available".to_string(),
        }
    }
}
