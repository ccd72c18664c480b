//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for agent-chat
#[derive(Parser, Debug)]
#[command(name = "agent-chat")]
#[command(author, version, about = "Terminal chat client for the agent chat service")]
#[command(long_about = r#"
Agent Chat talks to a chat agent over a WebSocket and renders the response
as it streams in.

Without a message it starts an interactive session; with a message it runs
a single turn and exits.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./agent-chat.toml   Project-level config
3. ~/.config/agent-chat/config.toml   Global config

The ENV environment variable selects the API environment (prod or dev).

Example:
  agent-chat --user-id 42 --chat-id 7
  agent-chat --user-id 42 --chat-id 7 "Summarize my last run"
  ENV=dev agent-chat --user-id 42 --chat-id 7
"#)]
pub struct Cli {
    /// Send one message, print the response and exit
    pub message: Option<String>,

    /// User the chat belongs to
    #[arg(long, value_name = "ID")]
    pub user_id: Option<String>,

    /// Chat to continue
    #[arg(long, value_name = "ID")]
    pub chat_id: Option<String>,

    /// API environment (`prod` selects production, anything else dev)
    #[arg(long, value_name = "NAME")]
    pub env: Option<String>,

    /// Ask for the whole response in one frame instead of a stream
    #[arg(long)]
    pub no_stream: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Write daily-rotated diagnostic logs to this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Append conversation events as JSON lines to this file
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_one_shot() {
        let cli = Cli::try_parse_from([
            "agent-chat",
            "--user-id",
            "42",
            "--chat-id",
            "7",
            "-vv",
            "hello there",
        ])
        .unwrap();
        assert_eq!(cli.user_id.as_deref(), Some("42"));
        assert_eq!(cli.chat_id.as_deref(), Some("7"));
        assert_eq!(cli.message.as_deref(), Some("hello there"));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.no_stream);
    }

    #[test]
    fn test_parse_interactive_defaults() {
        let cli = Cli::try_parse_from(["agent-chat", "--env", "dev", "--no-stream"]).unwrap();
        assert!(cli.message.is_none());
        assert_eq!(cli.env.as_deref(), Some("dev"));
        assert!(cli.no_stream);
        assert!(cli.config.is_none());
    }
}
