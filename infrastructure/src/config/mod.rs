//! Configuration file loading for agent-chat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ENV` environment variable (selects the API environment)
//! 2. `--config <path>` specified file
//! 3. Project root: `./agent-chat.toml` or `./.agent-chat.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/agent-chat/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileApiConfig, FileChatConfig, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileReplConfig,
};
pub use loader::ConfigLoader;
