//! Presentation layer for agent-chat
//!
//! This crate contains CLI definitions, console rendering, the waiting
//! spinner and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use config::{OutputConfig, ReplConfig};
pub use output::console::{ConsoleFormatter, ConsoleSurface};
pub use progress::reporter::ProgressReporter;
