//! Chat transport port
//!
//! Defines the interface for the bidirectional, text-framed connection to
//! the chat endpoint.

use async_trait::async_trait;
use chat_domain::ConnectionTarget;
use thiserror::Error;

/// Errors that can occur on a chat connection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Send failed: {0}")]
    SendFailed(String),

    #[error("Receive failed: {0}")]
    ReceiveFailed(String),

    #[error("Connection closed by peer")]
    Closed,

    #[error("Other error: {0}")]
    Other(String),
}

/// A frame received from the chat endpoint.
///
/// Control frames (ping/pong) are handled by the adapter and never surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundFrame {
    Text(String),
    Binary(Vec<u8>),
}

/// Opens connections to the chat endpoint
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Establish one connection to `target`.
    async fn connect(
        &self,
        target: &ConnectionTarget,
    ) -> Result<Box<dyn ChatConnection>, TransportError>;
}

/// An open chat connection
#[async_trait]
pub trait ChatConnection: Send {
    /// Send one text frame.
    async fn send_text(&mut self, text: &str) -> Result<(), TransportError>;

    /// Receive the next data frame.
    ///
    /// Returns `Ok(None)` once the peer has closed the connection.
    async fn recv_frame(&mut self) -> Result<Option<InboundFrame>, TransportError>;

    /// Close the connection. Closing twice is not an error.
    async fn close(&mut self) -> Result<(), TransportError>;
}
