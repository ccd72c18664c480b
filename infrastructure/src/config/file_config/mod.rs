//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod api;
mod chat;
mod logging;
mod output;
mod repl;

pub use api::FileApiConfig;
pub use chat::FileChatConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use chat_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// API hosts and environment
    pub api: FileApiConfig,
    /// Session identity and streaming
    pub chat: FileChatConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Conversation log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Replace the environment name; `None` keeps the loaded one.
    pub fn with_environment(mut self, environment: Option<&str>) -> Self {
        if let Some(name) = environment {
            self.api.environment = name.to_string();
        }
        self
    }

    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.api.validate();
        issues.extend(self.chat.validate());
        issues
    }
}
