//! Stream Response use case.
//!
//! The streaming response accumulator: opens one connection to the chat
//! endpoint, sends the request as a single frame, and feeds received frames
//! through a [`StreamSession`] until the sentinel, the early-stop rule, or a
//! cancellation ends the turn.

use crate::ports::chat_transport::{ChatConnection, ChatTransport, InboundFrame, TransportError};
use crate::ports::surface::ResponseObserver;
use chat_domain::{ConnectionTarget, DomainError, StreamSession, Termination};
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can occur while streaming a response.
///
/// Variants raised after the request was sent carry the text accumulated
/// before the failure.
#[derive(Error, Debug)]
pub enum StreamError {
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] DomainError),

    #[error("Failed to connect to chat endpoint: {0}")]
    Connect(TransportError),

    #[error("Failed to send request: {0}")]
    Send(TransportError),

    #[error("Stream disconnected after {frames} frames: {source}")]
    Disconnected {
        partial: String,
        frames: usize,
        source: TransportError,
    },

    #[error("Malformed frame after {frames} frames: {detail}")]
    MalformedFrame {
        partial: String,
        frames: usize,
        detail: String,
    },
}

/// Coarse classification of a [`StreamError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamErrorKind {
    InvalidRequest,
    Connect,
    Send,
    Disconnected,
    MalformedFrame,
}

impl StreamError {
    pub fn kind(&self) -> StreamErrorKind {
        match self {
            StreamError::InvalidRequest(_) => StreamErrorKind::InvalidRequest,
            StreamError::Connect(_) => StreamErrorKind::Connect,
            StreamError::Send(_) => StreamErrorKind::Send,
            StreamError::Disconnected { .. } => StreamErrorKind::Disconnected,
            StreamError::MalformedFrame { .. } => StreamErrorKind::MalformedFrame,
        }
    }

    /// Text received before the failure, if any arrived.
    pub fn partial(&self) -> Option<&str> {
        match self {
            StreamError::Disconnected { partial, .. }
            | StreamError::MalformedFrame { partial, .. }
                if !partial.is_empty() =>
            {
                Some(partial)
            }
            _ => None,
        }
    }
}

/// Input for the [`StreamResponseUseCase`].
#[derive(Debug, Clone)]
pub struct StreamResponseInput {
    /// Endpoint plus session query parameters.
    pub target: ConnectionTarget,
    /// Text sent as the single outbound frame.
    pub request: String,
    /// When false the turn ends after the first received frame.
    pub streaming_enabled: bool,
}

impl StreamResponseInput {
    /// Streaming follows the target's `stream_response` flag.
    pub fn new(target: ConnectionTarget, request: impl Into<String>) -> Self {
        let streaming_enabled = target.stream_response();
        Self {
            target,
            request: request.into(),
            streaming_enabled,
        }
    }

    pub fn with_streaming(mut self, enabled: bool) -> Self {
        self.streaming_enabled = enabled;
        self
    }
}

/// Final result of one streamed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamOutcome {
    /// Concatenation of every appended frame.
    pub text: String,
    /// Number of text frames appended.
    pub frames: usize,
    pub termination: Termination,
}

impl StreamOutcome {
    fn from_session(session: StreamSession) -> Self {
        let termination = session.termination().unwrap_or(Termination::Sentinel);
        let frames = session.frames();
        Self {
            text: session.into_buffer(),
            frames,
            termination,
        }
    }

    fn cancelled_before_start() -> Self {
        Self {
            text: String::new(),
            frames: 0,
            termination: Termination::Cancelled,
        }
    }
}

/// Use case for streaming one assistant response.
///
/// No retries and no timeout: a stalled connect, send or receive is ended
/// through the cancellation token.
pub struct StreamResponseUseCase {
    transport: Arc<dyn ChatTransport>,
}

impl Clone for StreamResponseUseCase {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
        }
    }
}

impl StreamResponseUseCase {
    pub fn new(transport: Arc<dyn ChatTransport>) -> Self {
        Self { transport }
    }

    /// Run one streamed response to completion, failure, or cancellation.
    pub async fn execute(
        &self,
        input: StreamResponseInput,
        observer: &dyn ResponseObserver,
        cancel: &CancellationToken,
    ) -> Result<StreamOutcome, StreamError> {
        let mut session = StreamSession::new(input.request, input.streaming_enabled)?;
        // Reject a bad endpoint before touching the network.
        input.target.to_url()?;

        if cancel.is_cancelled() {
            debug!("Turn cancelled before connecting");
            return Ok(StreamOutcome::cancelled_before_start());
        }

        info!(
            "Opening chat stream for {} (streaming: {})",
            input.target.identity(),
            session.streaming_enabled()
        );

        let connected = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Turn cancelled while connecting");
                return Ok(StreamOutcome::cancelled_before_start());
            }
            connected = self.transport.connect(&input.target) => connected,
        };
        let mut connection = connected.map_err(|e| {
            warn!("Chat connection failed: {}", e);
            StreamError::Connect(e)
        })?;

        let sent = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            sent = connection.send_text(session.request()) => Some(sent),
        };
        match sent {
            Some(Ok(())) => {}
            Some(Err(e)) => {
                warn!("Sending chat request failed: {}", e);
                close_quietly(connection.as_mut()).await;
                return Err(StreamError::Send(e));
            }
            None => {
                debug!("Turn cancelled while sending the request");
                close_quietly(connection.as_mut()).await;
                return Ok(StreamOutcome::cancelled_before_start());
            }
        }

        observer.on_response_start();
        let received = receive_frames(connection.as_mut(), &mut session, observer, cancel).await;
        observer.on_response_end();
        close_quietly(connection.as_mut()).await;

        match received {
            Ok(()) => {
                let outcome = StreamOutcome::from_session(session);
                info!(
                    "Chat stream finished ({}): {} frames, {} bytes",
                    outcome.termination.as_str(),
                    outcome.frames,
                    outcome.text.len()
                );
                Ok(outcome)
            }
            Err(e) => {
                warn!("Chat stream aborted: {}", e);
                Err(e)
            }
        }
    }
}

/// Receive loop. Cancellation is checked before every receive and raced
/// against a pending one.
async fn receive_frames(
    connection: &mut dyn ChatConnection,
    session: &mut StreamSession,
    observer: &dyn ResponseObserver,
    cancel: &CancellationToken,
) -> Result<(), StreamError> {
    loop {
        if cancel.is_cancelled() {
            session.cancel();
            return Ok(());
        }

        let received = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                session.cancel();
                return Ok(());
            }
            received = connection.recv_frame() => received,
        };

        let text = match received {
            Ok(Some(InboundFrame::Text(text))) => text,
            Ok(Some(InboundFrame::Binary(bytes))) => {
                String::from_utf8(bytes).map_err(|e| StreamError::MalformedFrame {
                    partial: session.buffer().to_string(),
                    frames: session.frames(),
                    detail: format!("binary frame is not UTF-8: {}", e),
                })?
            }
            Ok(None) => return Err(disconnected(session, TransportError::Closed)),
            Err(e) => return Err(disconnected(session, e)),
        };

        let outcome = session.accept(&text);
        if outcome.appended() {
            observer.on_partial(session.buffer());
        }
        if outcome.is_terminal() {
            return Ok(());
        }
    }
}

fn disconnected(session: &StreamSession, source: TransportError) -> StreamError {
    StreamError::Disconnected {
        partial: session.buffer().to_string(),
        frames: session.frames(),
        source,
    }
}

async fn close_quietly(connection: &mut dyn ChatConnection) {
    if let Err(e) = connection.close().await {
        debug!("Closing chat connection failed: {}", e);
    }
}
