//! MCP prompt adapter
//!
//! Loads prompts from an MCP (Model Context Protocol) session and converts
//! their messages into chat messages for a conversational framework.
//!
//! ## Conversion rules
//!
//! - `user` text → [`ChatMessage::Human`]
//! - `assistant` text → [`ChatMessage::Ai`]
//! - any other role with text content → [`AdapterError::UnsupportedRole`]
//! - any non-text content → [`AdapterError::UnsupportedContentType`]
//!
//! A single unsupported message fails the whole load.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mcp_prompt_adapter::{RecordedPromptSession, load_prompt};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let session = RecordedPromptSession::from_file("prompts.json")?;
//!     for message in load_prompt(&session, "code_review", None).await? {
//!         println!("{}: {}", message.message_type(), message.content());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Any MCP client can be plugged in by implementing [`PromptSession`].

pub mod cli;
pub mod converter;
pub mod loader;
pub mod runner;
pub mod session;
pub mod tracing;
pub mod types;

pub use converter::{MessageConverter, convert_prompt_message};
pub use loader::load_prompt;
pub use runner::run_with_cli;
pub use session::{PromptCatalog, PromptSession, RecordedPromptSession};
pub use types::{
    AdapterError, ChatMessage, ErrorCode, GetPromptResult, PromptArguments, PromptMessage,
    PromptMessageContent, Result, Role,
};
