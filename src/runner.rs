//! Binary runner
//!
//! Entry point for loading a recorded prompt from the command line.

use std::io::Write;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli::{Cli, OutputFormat};
use crate::loader::load_prompt;
use crate::session::RecordedPromptSession;
use crate::tracing::ResultTraceExt;
use crate::types::{AdapterError, ChatMessage};

/// Build an EnvFilter based on CLI args and RUST_LOG environment variable
///
/// Priority: RUST_LOG environment variable > CLI arguments (-v, -vv, -q)
fn build_env_filter(cli: &Cli) -> tracing_subscriber::EnvFilter {
    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        if !rust_log.is_empty() {
            return tracing_subscriber::EnvFilter::new(rust_log);
        }
    }

    let level = cli.log_level();
    tracing_subscriber::EnvFilter::default().add_directive(level.into())
}

/// Initialize logging with file output (diagnostic mode)
fn init_logging_to_file(cli: &Cli) -> anyhow::Result<()> {
    let filter = build_env_filter(cli);

    let log_path = cli.log_path();
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(&log_path)?;

    // stdout carries the converted prompt, so report the location on stderr
    eprintln!("Diagnostic mode: logging to {}", log_path.display());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Initialize logging with stderr output (normal mode)
fn init_logging_to_stderr(cli: &Cli) -> anyhow::Result<()> {
    let filter = build_env_filter(cli);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Initialize logging based on CLI arguments
fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    if cli.is_diagnostic() {
        init_logging_to_file(cli)
    } else {
        init_logging_to_stderr(cli)
    }
}

/// Run the adapter with CLI arguments
///
/// Initializes logging, loads the catalog and prints the converted prompt
/// (or the catalog's prompt names with `--list`) to stdout.
pub async fn run_with_cli(cli: &Cli) -> anyhow::Result<()> {
    init_logging(cli)?;

    tracing::info!(
        version = %env!("CARGO_PKG_VERSION"),
        catalog = %cli.catalog.display(),
        diagnostic = cli.is_diagnostic(),
        "Starting mcp-prompt-adapter"
    );

    let session = RecordedPromptSession::from_file(&cli.catalog).trace_err()?;

    if cli.list {
        let mut stdout = std::io::stdout().lock();
        for name in session.prompt_names() {
            writeln!(stdout, "{name}")?;
        }
        return Ok(());
    }

    let name = cli
        .prompt
        .as_deref()
        .ok_or_else(|| AdapterError::invalid_arguments("no prompt name given"))?;
    let arguments = cli.prompt_arguments().trace_err()?;

    let messages = load_prompt(&session, name, arguments.as_ref())
        .await
        .trace_err()?;

    tracing::info!(
        prompt = %name,
        message_count = messages.len(),
        "Prompt converted"
    );

    write_messages(&mut std::io::stdout().lock(), &messages, cli.format)?;
    Ok(())
}

/// Write converted messages in the requested format
pub fn write_messages(
    out: &mut impl Write,
    messages: &[ChatMessage],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, messages)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for message in messages {
                writeln!(out, "{}: {}", message.message_type(), message.content())?;
            }
        }
    }
    Ok(())
}
