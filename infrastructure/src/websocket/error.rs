//! Error types for the WebSocket adapter

use chat_application::ports::chat_transport::TransportError;
use chat_domain::DomainError;
use thiserror::Error;
use tokio_tungstenite::tungstenite;

/// Result type alias for WebSocket operations
pub type Result<T> = std::result::Result<T, WebSocketError>;

/// Errors that can occur when talking to the chat endpoint
#[derive(Error, Debug)]
pub enum WebSocketError {
    #[error("Invalid connection target: {0}")]
    InvalidTarget(#[from] DomainError),

    #[error("WebSocket handshake failed: {0}")]
    Handshake(#[source] tungstenite::Error),

    #[error("WebSocket send failed: {0}")]
    Send(#[source] tungstenite::Error),

    #[error("WebSocket receive failed: {0}")]
    Receive(#[source] tungstenite::Error),

    #[error("WebSocket close failed: {0}")]
    Close(#[source] tungstenite::Error),
}

impl From<WebSocketError> for TransportError {
    fn from(error: WebSocketError) -> Self {
        match &error {
            WebSocketError::InvalidTarget(_) | WebSocketError::Handshake(_) => {
                TransportError::ConnectionError(error.to_string())
            }
            WebSocketError::Send(_) => TransportError::SendFailed(error.to_string()),
            WebSocketError::Receive(_) => TransportError::ReceiveFailed(error.to_string()),
            WebSocketError::Close(_) => TransportError::Other(error.to_string()),
        }
    }
}
