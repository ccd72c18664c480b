//! Domain layer for agent-chat
//!
//! This crate contains the core entities and value objects of the chat
//! front-end. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Transcript
//!
//! An append-only, role-tagged message sequence for one chat session. The
//! first two entries are a fixed seed pair that primes the upstream context
//! and is never rendered.
//!
//! ## Stream session
//!
//! The per-turn response buffer. Frames are concatenated in receipt order
//! until the `END_OF_STREAM_RESPONSE` sentinel arrives, or after the first
//! frame when streaming is disabled.

pub mod config;
pub mod core;
pub mod endpoint;
pub mod stream;
pub mod transcript;

// Re-export commonly used types
pub use config::{
    config_key::ConfigKeyInfo,
    remote::{ConfigEnvelope, ConfigPanel, ContextWindow, RemoteConfig},
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use core::error::DomainError;
pub use endpoint::{
    environment::{ApiEndpoints, DEFAULT_DEV_HOST, DEFAULT_PROD_HOST, Environment},
    target::{ConnectionTarget, SessionIdentity},
};
pub use stream::session::{END_OF_STREAM_SENTINEL, FrameOutcome, StreamSession, Termination};
pub use transcript::{
    entities::{Message, MessageContent, Role},
    store::{SEED_ACKNOWLEDGMENT, SEED_LEN, Transcript},
};
