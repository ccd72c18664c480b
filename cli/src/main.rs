//! CLI entrypoint for Agent Chat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use chat_application::{
    ChatSettings, ChatSurface, ChatTurnUseCase, ConversationLogger, DisplayConfigUseCase,
    StreamResponseUseCase,
};
use chat_domain::{ConfigIssue, Severity, SessionIdentity, Transcript};
use chat_infrastructure::{
    ConfigLoader, FileConfig, HttpConfigProvider, JsonlConversationLogger, WebSocketTransport,
};
use chat_presentation::{ChatRepl, Cli, ConsoleSurface, OutputConfig, ReplConfig};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_dir.as_deref());

    info!("Starting Agent Chat");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let loaded = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    };
    // --env beats the ENV variable and every file
    let config = loaded
        .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
        .with_environment(cli.env.as_deref());

    let issues = config.validate();
    report_config_issues(&issues);
    if ConfigIssue::has_errors(&issues) {
        bail!("Configuration has errors, see above");
    }

    let api = &config.api;
    let endpoints = api.endpoints();
    info!(
        "Using {} environment at {}",
        api.environment(),
        endpoints.host()
    );

    let output_config = OutputConfig {
        color: config.output.color,
    };
    let repl_config = ReplConfig {
        show_progress: config.repl.show_progress && !cli.quiet,
        history_file: config.repl.history_file.clone(),
    };
    let surface = Arc::new(ConsoleSurface::new(&output_config, &repl_config));

    // === Dependency Injection ===
    let display_config =
        DisplayConfigUseCase::new(Arc::new(HttpConfigProvider::for_endpoints(&endpoints)));

    let identity = match resolve_identity(&cli, &config) {
        Ok(identity) => identity,
        Err(e) => {
            if cli.message.is_some() {
                bail!("{}. Pass --user-id and --chat-id to send a message.", e);
            }
            info!("Not starting chat: {}", e);
            surface.show_title();
            display_config.execute(false, &*surface).await;
            eprintln!("Pass --user-id and --chat-id (or set them under [chat]) to start chatting.");
            return Ok(());
        }
    };

    let stream_response = config.chat.stream_response && !cli.no_stream;
    let settings = ChatSettings::new(&endpoints, stream_response);
    let stream = StreamResponseUseCase::new(Arc::new(WebSocketTransport::new()));
    let mut turn = ChatTurnUseCase::new(stream, settings);

    let log_path = cli.conversation_log.clone().or_else(|| {
        config
            .logging
            .conversation_log
            .as_ref()
            .map(PathBuf::from)
    });
    if let Some(logger) = log_path.as_deref().and_then(open_conversation_log) {
        turn = turn.with_conversation_logger(logger);
    }

    let mut transcript = Transcript::seeded(identity);

    // One-shot mode
    if let Some(message) = cli.message {
        turn.execute(
            &mut transcript,
            &message,
            &*surface,
            &CancellationToken::new(),
        )
        .await?;
        return Ok(());
    }

    // Interactive mode
    surface.show_title();
    display_config.execute(true, &*surface).await;

    let mut repl = ChatRepl::new(turn, display_config, surface, transcript)
        .with_history_file(repl_config.history_path());
    repl.run().await?;

    Ok(())
}

/// Install the tracing subscriber: stderr at the `-v` level, plus a daily
/// rolling file when `--log-dir` is given.
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "agent-chat.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .init();

    guard
}

fn report_config_issues(issues: &[ConfigIssue]) {
    for issue in issues {
        match issue.severity {
            Severity::Error => eprintln!("config error: {}", issue.message),
            Severity::Warning => warn!("config: {}", issue.message),
        }
    }
}

/// Flags win over the `[chat]` section, field by field.
fn resolve_identity(
    cli: &Cli,
    config: &FileConfig,
) -> Result<SessionIdentity, chat_domain::DomainError> {
    SessionIdentity::from_parts(
        cli.user_id.as_deref().or(config.chat.user_id.as_deref()),
        cli.chat_id.as_deref().or(config.chat.chat_id.as_deref()),
    )
}

fn open_conversation_log(path: &Path) -> Option<Arc<dyn ConversationLogger>> {
    let logger = JsonlConversationLogger::open(path)?;
    info!("Conversation log: {}", logger.path().display());
    Some(Arc::new(logger))
}
