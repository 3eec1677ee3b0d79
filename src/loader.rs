//! Prompt loading
//!
//! Fetches a prompt through a [`PromptSession`] and converts its messages.

use tracing::instrument;

use crate::converter::MessageConverter;
use crate::session::PromptSession;
use crate::types::{ChatMessage, PromptArguments, Result};

/// Load an MCP prompt and convert it to chat messages
///
/// Awaits the session exactly once; no retry and no timeout are added on
/// top of whatever the session does. Messages keep the order the server
/// returned them in.
///
/// # Errors
///
/// Session errors are returned as-is. Conversion stops at the first
/// unsupported message and its error is returned without any partial
/// result.
#[instrument(
    name = "load_prompt",
    skip(session, arguments),
    fields(
        prompt = %name,
        argument_count = arguments.map_or(0, |args| args.len()),
    )
)]
pub async fn load_prompt<S>(
    session: &S,
    name: &str,
    arguments: Option<&PromptArguments>,
) -> Result<Vec<ChatMessage>>
where
    S: PromptSession + ?Sized,
{
    let response = session.get_prompt(name, arguments).await?;

    tracing::debug!(
        message_count = response.messages.len(),
        has_description = response.description.is_some(),
        "Fetched prompt"
    );

    MessageConverter::new().convert_all(&response.messages)
}
