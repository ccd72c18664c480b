//! WebSocket adapter for the chat endpoint

pub mod error;
pub mod transport;

pub use error::WebSocketError;
pub use transport::{WebSocketConnection, WebSocketTransport};
