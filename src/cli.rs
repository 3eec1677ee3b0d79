//! Command-line interface definitions
//!
//! Provides CLI argument parsing using clap for the prompt adapter binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::types::{AdapterError, PromptArguments, Result};

/// Load an MCP prompt from a recorded catalog and print it as chat messages
#[derive(Parser, Debug, Clone)]
#[command(name = "mcp-prompt-adapter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Prompt name to load
    #[arg(value_name = "PROMPT", required_unless_present = "list")]
    pub prompt: Option<String>,

    /// Recorded prompt catalog (JSON)
    #[arg(short, long, value_name = "FILE", env = "MCP_PROMPT_CATALOG")]
    pub catalog: PathBuf,

    /// Prompt argument as KEY=VALUE (repeatable)
    #[arg(short, long = "arg", value_name = "KEY=VALUE")]
    pub args: Vec<String>,

    /// Prompt arguments as a JSON object, merged before --arg values
    #[arg(long, value_name = "JSON")]
    pub arguments: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// List recorded prompt names and exit
    #[arg(long)]
    pub list: bool,

    /// Enable diagnostic mode (auto-log to temp file)
    #[arg(short, long)]
    pub diagnostic: bool,

    /// Log directory (implies diagnostic mode)
    #[arg(short = 'l', long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log file name (implies diagnostic mode)
    #[arg(short = 'f', long, value_name = "FILE")]
    pub log_file: Option<String>,

    /// Increase logging verbosity (-v, -vv)
    /// Note: RUST_LOG env var takes priority over this flag
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only errors)
    /// Note: RUST_LOG env var takes priority over this flag
    #[arg(short, long)]
    pub quiet: bool,
}

/// How converted messages are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    Json,
    /// One `type: content` block per message
    Text,
}

#[allow(clippy::derivable_impls)]
impl Default for Cli {
    fn default() -> Self {
        Self {
            prompt: None,
            catalog: PathBuf::new(),
            args: Vec::new(),
            arguments: None,
            format: OutputFormat::Json,
            list: false,
            diagnostic: false,
            log_dir: None,
            log_file: None,
            verbose: 0,
            quiet: false,
        }
    }
}

impl Cli {
    /// Check if diagnostic mode is enabled (output to file)
    ///
    /// Returns true if `--diagnostic` is set, or if `--log-dir` or `--log-file` is specified.
    pub fn is_diagnostic(&self) -> bool {
        self.diagnostic || self.log_dir.is_some() || self.log_file.is_some()
    }

    /// Get the log level based on CLI arguments
    ///
    /// - `--quiet`: ERROR
    /// - default: WARN
    /// - `-v`: DEBUG
    /// - `-vv` or more: TRACE
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else {
            match self.verbose {
                0 => tracing::Level::WARN,
                1 => tracing::Level::DEBUG,
                _ => tracing::Level::TRACE,
            }
        }
    }

    /// Get the log file path for diagnostic mode
    ///
    /// Uses the specified log directory and file name, or defaults to:
    /// - Directory: system temp directory
    /// - File: `mcp-prompt-adapter-{timestamp}.log`
    pub fn log_path(&self) -> PathBuf {
        let dir = self.log_dir.clone().unwrap_or_else(std::env::temp_dir);

        let filename = self.log_file.clone().unwrap_or_else(|| {
            let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
            format!("mcp-prompt-adapter-{timestamp}.log")
        });

        dir.join(filename)
    }

    /// Collect prompt arguments from `--arguments` and `--arg`
    ///
    /// Returns `None` when no argument was given, so the session sees the
    /// same thing as a call without arguments. `--arg` values are strings
    /// and override keys from `--arguments`.
    pub fn prompt_arguments(&self) -> Result<Option<PromptArguments>> {
        if self.arguments.is_none() && self.args.is_empty() {
            return Ok(None);
        }

        let mut arguments = match &self.arguments {
            Some(json) => match serde_json::from_str::<serde_json::Value>(json)? {
                serde_json::Value::Object(map) => map,
                other => {
                    return Err(AdapterError::invalid_arguments(format!(
                        "--arguments must be a JSON object, got {other}"
                    )));
                }
            },
            None => PromptArguments::new(),
        };

        for pair in &self.args {
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                AdapterError::invalid_arguments(format!("expected KEY=VALUE, got '{pair}'"))
            })?;
            if key.is_empty() {
                return Err(AdapterError::invalid_arguments(format!(
                    "empty key in '{pair}'"
                )));
            }
            arguments.insert(key.to_string(), serde_json::Value::String(value.to_string()));
        }

        Ok(Some(arguments))
    }
}
