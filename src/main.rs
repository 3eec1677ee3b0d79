//! MCP prompt adapter binary
//!
//! Run with: cargo run -- --catalog prompts.json <PROMPT>
//!
//! For help: cargo run -- --help

use clap::Parser;
use mcp_prompt_adapter::{cli::Cli, run_with_cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = run_with_cli(&cli).await {
        // stdout carries the converted prompt, keep errors on stderr
        eprintln!("Error: {e}");
        if !cli.is_diagnostic() && cli.verbose == 0 {
            eprintln!("\nFor more detail, run with -v or --diagnostic.");
        }
        std::process::exit(1);
    }

    Ok(())
}
