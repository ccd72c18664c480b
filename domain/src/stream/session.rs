//! Per-turn stream session state machine.
//!
//! [`StreamSession`] owns the growing response buffer and decides, frame by
//! frame, whether the turn continues. It performs no I/O; the accumulator
//! use case feeds it frames received from a transport.

use crate::core::error::DomainError;

/// Frame value that terminates a response. Matched exactly, never appended.
pub const END_OF_STREAM_SENTINEL: &str = "END_OF_STREAM_RESPONSE";

/// What the session did with one received frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Text was appended; keep receiving.
    Appended,
    /// Text was appended and the session stops (streaming disabled).
    AppendedFinal,
    /// The sentinel arrived; nothing was appended.
    EndOfStream,
}

impl FrameOutcome {
    /// Whether the buffer grew with this frame.
    pub fn appended(&self) -> bool {
        matches!(self, FrameOutcome::Appended | FrameOutcome::AppendedFinal)
    }

    /// Whether no further frame should be received.
    pub fn is_terminal(&self) -> bool {
        matches!(self, FrameOutcome::AppendedFinal | FrameOutcome::EndOfStream)
    }
}

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The sentinel frame was received.
    Sentinel,
    /// Streaming was disabled and the first frame was taken.
    EarlyStop,
    /// The caller cancelled the turn.
    Cancelled,
}

impl Termination {
    pub fn as_str(&self) -> &'static str {
        match self {
            Termination::Sentinel => "sentinel",
            Termination::EarlyStop => "early_stop",
            Termination::Cancelled => "cancelled",
        }
    }
}

/// One chat turn's response accumulation (Entity)
#[derive(Debug, Clone)]
pub struct StreamSession {
    request: String,
    buffer: String,
    streaming_enabled: bool,
    frames: usize,
    termination: Option<Termination>,
}

impl StreamSession {
    /// Start a session for a non-blank request.
    pub fn new(request: impl Into<String>, streaming_enabled: bool) -> Result<Self, DomainError> {
        let request = request.into();
        if request.trim().is_empty() {
            return Err(DomainError::EmptyRequest);
        }
        Ok(Self {
            request,
            buffer: String::new(),
            streaming_enabled,
            frames: 0,
            termination: None,
        })
    }

    pub fn request(&self) -> &str {
        &self.request
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn streaming_enabled(&self) -> bool {
        self.streaming_enabled
    }

    /// Number of text frames appended so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    pub fn is_finished(&self) -> bool {
        self.termination.is_some()
    }

    /// Process one received frame.
    ///
    /// Frames offered after the session finished are ignored and reported
    /// as [`FrameOutcome::EndOfStream`].
    pub fn accept(&mut self, frame: &str) -> FrameOutcome {
        if self.is_finished() {
            return FrameOutcome::EndOfStream;
        }

        if frame == END_OF_STREAM_SENTINEL {
            self.termination = Some(Termination::Sentinel);
            return FrameOutcome::EndOfStream;
        }

        self.buffer.push_str(frame);
        self.frames += 1;

        if self.streaming_enabled {
            FrameOutcome::Appended
        } else {
            self.termination = Some(Termination::EarlyStop);
            FrameOutcome::AppendedFinal
        }
    }

    /// Mark the session cancelled, keeping whatever text arrived.
    pub fn cancel(&mut self) {
        if self.termination.is_none() {
            self.termination = Some(Termination::Cancelled);
        }
    }

    /// Consume the session and return the accumulated text.
    pub fn into_buffer(self) -> String {
        self.buffer
    }
}
