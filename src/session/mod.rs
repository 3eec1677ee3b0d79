//! Prompt session capability
//!
//! The adapter never speaks MCP itself. It is handed something that can
//! fetch a prompt, and awaits it once per load.

mod recorded;

use std::sync::Arc;

use async_trait::async_trait;

use crate::types::{GetPromptResult, PromptArguments, Result};

pub use recorded::{PromptCatalog, RecordedPromptSession};

/// Something that can serve MCP `prompts/get`
///
/// Transport, authentication and retries are the implementor's concern.
/// Errors returned here reach the caller of [`crate::load_prompt`] unchanged.
#[async_trait]
pub trait PromptSession: Send + Sync {
    /// Fetch the named prompt, rendered with the given arguments
    async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<&PromptArguments>,
    ) -> Result<GetPromptResult>;
}

#[async_trait]
impl<T: PromptSession + ?Sized> PromptSession for &T {
    async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<&PromptArguments>,
    ) -> Result<GetPromptResult> {
        (**self).get_prompt(name, arguments).await
    }
}

#[async_trait]
impl<T: PromptSession + ?Sized> PromptSession for Box<T> {
    async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<&PromptArguments>,
    ) -> Result<GetPromptResult> {
        (**self).get_prompt(name, arguments).await
    }
}

#[async_trait]
impl<T: PromptSession + ?Sized> PromptSession for Arc<T> {
    async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<&PromptArguments>,
    ) -> Result<GetPromptResult> {
        (**self).get_prompt(name, arguments).await
    }
}
