//! Public types for the MCP prompt adapter
//!
//! This module contains all the shared types used across the crate.

mod error;
mod message;
mod prompt;

pub use error::{AdapterError, ErrorCode, Result};
pub use message::ChatMessage;
pub use prompt::{
    AudioContent, EmbeddedResource, GetPromptResult, ImageContent, PromptArguments,
    PromptMessage, PromptMessageContent, ResourceContents, ResourceLink, Role, TextContent,
};
