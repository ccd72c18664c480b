//! REPL (Read-Eval-Print Loop) for interactive chat

use chat_application::{ChatSurface, ChatTurnUseCase, DisplayConfigUseCase};
use chat_domain::{Termination, Transcript};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Slash commands understood by the REPL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    History,
    Config,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a slash command; `None` for a regular message.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if !line.starts_with('/') {
            return None;
        }
        Some(match line {
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/history" => ReplCommand::History,
            "/config" => ReplCommand::Config,
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            other => ReplCommand::Unknown(other.to_string()),
        })
    }
}

/// Interactive chat REPL
pub struct ChatRepl<S: ChatSurface + 'static> {
    turn: ChatTurnUseCase,
    display_config: DisplayConfigUseCase,
    surface: Arc<S>,
    transcript: Transcript,
    history_path: Option<PathBuf>,
}

impl<S: ChatSurface + 'static> ChatRepl<S> {
    /// Create a new ChatRepl
    pub fn new(
        turn: ChatTurnUseCase,
        display_config: DisplayConfigUseCase,
        surface: Arc<S>,
        transcript: Transcript,
    ) -> Self {
        Self {
            turn,
            display_config,
            surface,
            transcript,
            history_path: None,
        }
    }

    /// Persist line-editor history to this file
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if let Some(command) = ReplCommand::parse(line) {
                        if self.handle_command(command).await {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    self.process_message(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!("{}", "How can I help you today?".bold());
        println!("{}", "Type /help for commands, Ctrl-C stops a response.".dimmed());
        println!();
    }

    fn print_help(&self) {
        println!();
        println!("Commands:");
        println!("  /help, /h, /?    - Show this help");
        println!("  /history         - Show this chat so far");
        println!("  /config          - Show the model and context settings");
        println!("  /quit, /exit, /q - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                true
            }
            ReplCommand::Help => {
                self.print_help();
                false
            }
            ReplCommand::History => {
                println!();
                if self.transcript.is_empty() {
                    println!("{}", "No messages yet.".dimmed());
                }
                for message in self.transcript.renderable() {
                    self.surface.show_message(message);
                }
                println!();
                false
            }
            ReplCommand::Config => {
                if self
                    .display_config
                    .execute(true, &*self.surface)
                    .await
                    .is_none()
                {
                    println!("{}", "Configuration is unavailable right now.".dimmed());
                }
                false
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    /// Run one turn; Ctrl-C while it runs cancels it.
    async fn process_message(&mut self, message: &str) {
        println!();

        let cancel = CancellationToken::new();
        let surface = &*self.surface;
        let turn = self
            .turn
            .execute(&mut self.transcript, message, surface, &cancel);
        tokio::pin!(turn);

        let result = loop {
            tokio::select! {
                result = &mut turn => break result,
                _ = tokio::signal::ctrl_c(), if !cancel.is_cancelled() => {
                    debug!("Interrupt received, cancelling turn");
                    cancel.cancel();
                }
            }
        };

        match result {
            Ok(outcome) if outcome.termination == Termination::Cancelled => {
                println!("{}", "(response cancelled)".dimmed());
            }
            Ok(_) => {}
            Err(e) => surface.show_turn_failed(&e.to_string(), e.partial()),
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(ReplCommand::parse("/help"), Some(ReplCommand::Help));
        assert_eq!(ReplCommand::parse("/?"), Some(ReplCommand::Help));
        assert_eq!(ReplCommand::parse(" /history "), Some(ReplCommand::History));
        assert_eq!(ReplCommand::parse("/config"), Some(ReplCommand::Config));
        assert_eq!(ReplCommand::parse("/exit"), Some(ReplCommand::Quit));
        assert_eq!(ReplCommand::parse("/q"), Some(ReplCommand::Quit));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            ReplCommand::parse("/models"),
            Some(ReplCommand::Unknown("/models".to_string()))
        );
    }

    #[test]
    fn test_messages_are_not_commands() {
        assert_eq!(ReplCommand::parse("hello /help"), None);
        assert_eq!(ReplCommand::parse("what is 3/4?"), None);
    }
}
