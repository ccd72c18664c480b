//! Console rendering for the chat front-end

use crate::config::{OutputConfig, ReplConfig};
use crate::progress::reporter::ProgressReporter;
use chat_application::ports::surface::{ChatSurface, ResponseObserver};
use chat_domain::{ConfigPanel, Message, Role};
use colored::Colorize;
use std::io::Write;
use std::sync::Mutex;

const PANEL_WIDTH: usize = 60;

/// Formats chat output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn title() -> String {
        let line = "=".repeat(PANEL_WIDTH);
        format!(
            "{}\n{:^width$}\n{}",
            line.cyan(),
            "Agent Chat".bold(),
            line.cyan(),
            width = PANEL_WIDTH
        )
    }

    /// Bordered panel with the model name and the context line.
    pub fn config_panel(panel: &ConfigPanel) -> String {
        let border = "-".repeat(PANEL_WIDTH);
        format!(
            "{}\n  {} {}\n  {}\n{}",
            border.dimmed(),
            "Model:".cyan().bold(),
            panel.model_name.yellow().bold(),
            panel.context_line(),
            border.dimmed()
        )
    }

    pub fn role_label(role: Role) -> String {
        match role {
            Role::User => format!("{}", "You:".green().bold()),
            Role::Assistant => format!("{}", "Assistant:".cyan().bold()),
        }
    }

    /// One transcript entry. Non-text content renders as nothing.
    pub fn message(message: &Message) -> Option<String> {
        let text = message.text()?;
        Some(format!("{} {}", Self::role_label(message.role()), text))
    }

    pub fn turn_failed(reason: &str, partial: Option<&str>) -> String {
        let mut output = format!("{} {}", "No response:".red().bold(), reason);
        if let Some(partial) = partial {
            output.push_str(&format!(
                "\n{}",
                format!("({} characters received before the failure)", partial.chars().count())
                    .dimmed()
            ));
        }
        output
    }
}

/// Tracks how much of the cumulative response buffer is already on screen.
#[derive(Debug, Default)]
pub struct StreamPrinter {
    printed: usize,
}

impl StreamPrinter {
    pub fn reset(&mut self) {
        self.printed = 0;
    }

    /// The part of `buffer` not printed yet.
    pub fn delta<'a>(&mut self, buffer: &'a str) -> &'a str {
        match buffer.get(self.printed..) {
            Some(rest) => {
                self.printed = buffer.len();
                rest
            }
            None => "",
        }
    }

    pub fn has_output(&self) -> bool {
        self.printed > 0
    }
}

/// [`ChatSurface`] that writes to stdout
pub struct ConsoleSurface {
    progress: Option<ProgressReporter>,
    printer: Mutex<StreamPrinter>,
}

impl ConsoleSurface {
    pub fn new(output: &OutputConfig, repl: &ReplConfig) -> Self {
        if !output.color {
            colored::control::set_override(false);
        }
        Self {
            progress: repl.show_progress.then(ProgressReporter::new),
            printer: Mutex::new(StreamPrinter::default()),
        }
    }

    fn stop_progress(&self) {
        if let Some(progress) = &self.progress {
            progress.finish();
        }
    }
}

impl ResponseObserver for ConsoleSurface {
    fn on_response_start(&self) {
        if let Ok(mut printer) = self.printer.lock() {
            printer.reset();
        }
        if let Some(progress) = &self.progress {
            progress.start();
        }
    }

    fn on_partial(&self, buffer: &str) {
        self.stop_progress();

        let Ok(mut printer) = self.printer.lock() else {
            return;
        };
        let first = !printer.has_output();
        let delta = printer.delta(buffer);
        if delta.is_empty() {
            return;
        }

        let mut stdout = std::io::stdout().lock();
        if first {
            let _ = write!(stdout, "{} ", ConsoleFormatter::role_label(Role::Assistant));
        }
        let _ = write!(stdout, "{}", delta);
        let _ = stdout.flush();
    }

    fn on_response_end(&self) {
        self.stop_progress();
        if let Ok(printer) = self.printer.lock()
            && printer.has_output()
        {
            println!();
        }
    }
}

impl ChatSurface for ConsoleSurface {
    fn show_title(&self) {
        println!();
        println!("{}", ConsoleFormatter::title());
        println!();
    }

    fn show_config_panel(&self, panel: &ConfigPanel) {
        println!("{}", ConsoleFormatter::config_panel(panel));
        println!();
    }

    fn show_message(&self, message: &Message) {
        if let Some(line) = ConsoleFormatter::message(message) {
            println!("{}", line);
        }
    }

    fn show_turn_failed(&self, reason: &str, partial: Option<&str>) {
        self.stop_progress();
        eprintln!("{}", ConsoleFormatter::turn_failed(reason, partial));
    }
}
