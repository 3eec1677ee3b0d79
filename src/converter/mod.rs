//! Message conversion utilities for MCP prompts
//!
//! This module handles conversion from MCP `PromptMessage` to `ChatMessage`.

mod prompt;

pub use prompt::{MessageConverter, convert_prompt_message};
