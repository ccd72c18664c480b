//! WebSocket implementation of the chat transport.
//!
//! Each chat turn opens its own connection: one outbound text frame with the
//! request, then inbound frames until the application stops reading.
//! Ping/pong frames are answered by tungstenite and never surface.

use crate::websocket::error::{Result, WebSocketError};
use async_trait::async_trait;
use chat_application::ports::chat_transport::{
    ChatConnection, ChatTransport, InboundFrame, TransportError,
};
use chat_domain::ConnectionTarget;
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::{self, Message as WsMessage};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::{debug, info, trace};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// [`ChatTransport`] over `ws://` / `wss://`
#[derive(Debug, Default, Clone)]
pub struct WebSocketTransport;

impl WebSocketTransport {
    pub fn new() -> Self {
        Self
    }

    /// Open a connection to the target's URL.
    pub async fn open(&self, target: &ConnectionTarget) -> Result<WebSocketConnection> {
        let url = target.to_url()?;
        debug!("Connecting to {}", url);

        let (stream, response) = connect_async(url.as_str())
            .await
            .map_err(WebSocketError::Handshake)?;

        info!(
            "Chat connection open for {} (HTTP {})",
            target.identity(),
            response.status()
        );

        Ok(WebSocketConnection {
            stream,
            closed: false,
        })
    }
}

#[async_trait]
impl ChatTransport for WebSocketTransport {
    async fn connect(
        &self,
        target: &ConnectionTarget,
    ) -> std::result::Result<Box<dyn ChatConnection>, TransportError> {
        let connection = self.open(target).await?;
        Ok(Box::new(connection))
    }
}

/// An open chat WebSocket
pub struct WebSocketConnection {
    stream: WsStream,
    closed: bool,
}

impl WebSocketConnection {
    async fn send(&mut self, text: &str) -> Result<()> {
        trace!("-> {} bytes", text.len());
        self.stream
            .send(WsMessage::Text(text.to_string()))
            .await
            .map_err(WebSocketError::Send)
    }

    async fn next_frame(&mut self) -> Result<Option<InboundFrame>> {
        while let Some(message) = self.stream.next().await {
            let message = match message {
                Ok(m) => m,
                Err(tungstenite::Error::ConnectionClosed | tungstenite::Error::AlreadyClosed) => {
                    return Ok(None);
                }
                Err(e) => return Err(WebSocketError::Receive(e)),
            };

            match message {
                WsMessage::Text(text) => {
                    trace!("<- text frame, {} bytes", text.len());
                    return Ok(Some(InboundFrame::Text(text)));
                }
                WsMessage::Binary(bytes) => {
                    trace!("<- binary frame, {} bytes", bytes.len());
                    return Ok(Some(InboundFrame::Binary(bytes)));
                }
                WsMessage::Close(frame) => {
                    match frame {
                        Some(f) => debug!("Peer closed chat connection: {} {}", f.code, f.reason),
                        None => debug!("Peer closed chat connection"),
                    }
                    return Ok(None);
                }
                WsMessage::Ping(_) | WsMessage::Pong(_) | WsMessage::Frame(_) => continue,
            }
        }
        Ok(None)
    }

    async fn shutdown(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        match self.stream.close(None).await {
            Ok(()) => Ok(()),
            Err(tungstenite::Error::ConnectionClosed | tungstenite::Error::AlreadyClosed) => Ok(()),
            Err(e) => Err(WebSocketError::Close(e)),
        }
    }
}

#[async_trait]
impl ChatConnection for WebSocketConnection {
    async fn send_text(&mut self, text: &str) -> std::result::Result<(), TransportError> {
        Ok(self.send(text).await?)
    }

    async fn recv_frame(&mut self) -> std::result::Result<Option<InboundFrame>, TransportError> {
        Ok(self.next_frame().await?)
    }

    async fn close(&mut self) -> std::result::Result<(), TransportError> {
        Ok(self.shutdown().await?)
    }
}
