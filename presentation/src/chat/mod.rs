//! Interactive chat module
//!
//! Provides a readline-based interactive chat session.

mod repl;

pub use repl::{ChatRepl, ReplCommand};
