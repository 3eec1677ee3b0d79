//! MCP prompt message to chat message conversion
//!
//! Converts MCP `PromptMessage`s into local `ChatMessage`s.

use crate::types::{AdapterError, ChatMessage, PromptMessage, PromptMessageContent, Result, Role};

/// Prompt message converter
///
/// Only text content authored by the user or the assistant has a local
/// counterpart. Content type is checked before role.
#[derive(Debug, Default, Clone, Copy)]
pub struct MessageConverter;

impl MessageConverter {
    /// Create a new message converter
    pub fn new() -> Self {
        Self
    }

    /// Convert a single prompt message
    ///
    /// # Errors
    ///
    /// - `UnsupportedContentType` if the content is not text, whatever the role
    /// - `UnsupportedRole` if text content has a role other than user/assistant
    #[allow(clippy::unused_self)]
    pub fn convert(&self, message: &PromptMessage) -> Result<ChatMessage> {
        let PromptMessageContent::Text(content) = &message.content else {
            return Err(AdapterError::unsupported_content_type(
                message.content.content_type(),
            ));
        };

        match &message.role {
            Role::User => Ok(ChatMessage::human(content.text.as_str())),
            Role::Assistant => Ok(ChatMessage::ai(content.text.as_str())),
            Role::Other(role) => Err(AdapterError::unsupported_role(role.as_str())),
        }
    }

    /// Convert messages in order, stopping at the first unsupported one
    ///
    /// No partial result is returned on failure.
    pub fn convert_all(&self, messages: &[PromptMessage]) -> Result<Vec<ChatMessage>> {
        messages
            .iter()
            .enumerate()
            .map(|(index, message)| {
                self.convert(message).inspect_err(|e| {
                    tracing::warn!(
                        index,
                        role = %message.role,
                        content_type = message.content.content_type(),
                        error = %e,
                        "Prompt message cannot be converted"
                    );
                })
            })
            .collect()
    }
}

/// Convert a single MCP prompt message to a chat message
pub fn convert_prompt_message(message: &PromptMessage) -> Result<ChatMessage> {
    MessageConverter::new().convert(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AudioContent, EmbeddedResource, ImageContent, ResourceContents, ResourceLink};
    use pretty_assertions::assert_eq;

    fn image() -> PromptMessageContent {
        PromptMessageContent::Image(ImageContent {
            data: "iVBORw0KGgo=".to_string(),
            mime_type: "image/png".to_string(),
            annotations: None,
        })
    }

    #[test]
    fn test_user_text_becomes_human() {
        let message = PromptMessage::text(Role::User, "Hello, world!");
        let result = convert_prompt_message(&message).unwrap();
        assert_eq!(result, ChatMessage::human("Hello, world!"));
    }

    #[test]
    fn test_assistant_text_becomes_ai() {
        let message = PromptMessage::text(Role::Assistant, "How can I help?");
        let result = convert_prompt_message(&message).unwrap();
        assert_eq!(result, ChatMessage::ai("How can I help?"));
    }

    #[test]
    fn test_empty_text_is_preserved() {
        let message = PromptMessage::text(Role::User, "");
        let result = convert_prompt_message(&message).unwrap();
        assert_eq!(result, ChatMessage::human(""));
    }

    #[test]
    fn test_input_is_untouched() {
        let message = PromptMessage::text(Role::Assistant, "unchanged");
        let before = message.clone();
        let converted = convert_prompt_message(&message).unwrap();
        assert_eq!(converted, ChatMessage::ai("unchanged"));
        assert_eq!(message, before);
    }

    #[test]
    fn test_unsupported_role() {
        let message = PromptMessage::text("system", "You are a helpful assistant");
        let err = convert_prompt_message(&message).unwrap_err();

        assert!(matches!(&err, AdapterError::UnsupportedRole(role) if role == "system"));
        assert_eq!(err.to_string(), "Unsupported prompt message role: system");
    }

    #[test]
    fn test_unsupported_content_type() {
        let message = PromptMessage {
            role: Role::User,
            content: image(),
        };
        let err = convert_prompt_message(&message).unwrap_err();

        assert!(matches!(&err, AdapterError::UnsupportedContentType(t) if t == "image"));
        assert_eq!(
            err.to_string(),
            "Unsupported prompt message content type: image"
        );
    }

    #[test]
    fn test_content_type_checked_before_role() {
        // A bad role with bad content reports the content type
        let message = PromptMessage {
            role: Role::from("system"),
            content: image(),
        };
        let err = convert_prompt_message(&message).unwrap_err();
        assert!(matches!(err, AdapterError::UnsupportedContentType(_)));
    }

    #[test]
    fn test_every_non_text_content_is_rejected() {
        let contents = vec![
            image(),
            PromptMessageContent::Audio(AudioContent {
                data: "AAAA".to_string(),
                mime_type: "audio/wav".to_string(),
                annotations: None,
            }),
            PromptMessageContent::Resource(EmbeddedResource {
                resource: ResourceContents {
                    uri: "file:///notes.md".to_string(),
                    mime_type: Some("text/markdown".to_string()),
                    text: Some("# Notes".to_string()),
                    blob: None,
                },
                annotations: None,
            }),
            PromptMessageContent::ResourceLink(ResourceLink {
                uri: "file:///main.rs".to_string(),
                name: "main.rs".to_string(),
                title: None,
                description: None,
                mime_type: None,
                annotations: None,
            }),
        ];

        for content in contents {
            let expected = content.content_type();
            for role in [Role::User, Role::Assistant] {
                let message = PromptMessage {
                    role,
                    content: content.clone(),
                };
                let err = convert_prompt_message(&message).unwrap_err();
                assert!(
                    matches!(&err, AdapterError::UnsupportedContentType(t) if t == expected),
                    "unexpected error for {expected}: {err}"
                );
            }
        }
    }

    #[test]
    fn test_convert_all_preserves_order() {
        let messages = vec![
            PromptMessage::text(Role::User, "Hi"),
            PromptMessage::text(Role::Assistant, "Hello"),
            PromptMessage::text(Role::User, "Review my code"),
        ];

        let result = MessageConverter::new().convert_all(&messages).unwrap();
        assert_eq!(
            result,
            vec![
                ChatMessage::human("Hi"),
                ChatMessage::ai("Hello"),
                ChatMessage::human("Review my code"),
            ]
        );
    }

    #[test]
    fn test_convert_all_fails_fast() {
        let messages = vec![
            PromptMessage::text(Role::User, "Hi"),
            PromptMessage::text("system", "Be terse"),
            PromptMessage {
                role: Role::User,
                content: image(),
            },
        ];

        let err = MessageConverter::new().convert_all(&messages).unwrap_err();
        // The first failure wins
        assert!(matches!(err, AdapterError::UnsupportedRole(_)));
    }

    #[test]
    fn test_convert_all_empty() {
        let result = MessageConverter::new().convert_all(&[]).unwrap();
        assert!(result.is_empty());
    }
}
