//! Infrastructure layer for agent-chat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the chat WebSocket, the config endpoint
//! over HTTP, configuration file loading and the conversation log.

pub mod config;
pub mod http;
pub mod logging;
pub mod websocket;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileApiConfig, FileChatConfig, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileReplConfig,
};
pub use http::HttpConfigProvider;
pub use logging::JsonlConversationLogger;
pub use websocket::{WebSocketConnection, WebSocketError, WebSocketTransport};
