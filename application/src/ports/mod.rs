//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters and the
//! presentation layer must implement.

pub mod chat_transport;
pub mod config_provider;
pub mod conversation_logger;
pub mod surface;
