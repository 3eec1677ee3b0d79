//! Local chat message type produced by the converter

use serde::{Deserialize, Serialize};

/// A conversational message in the consuming framework's shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChatMessage {
    /// Message authored by the human side of the conversation
    Human { content: String },
    /// Message authored by the model
    Ai { content: String },
}

impl ChatMessage {
    /// Create a human message
    pub fn human(content: impl Into<String>) -> Self {
        ChatMessage::Human {
            content: content.into(),
        }
    }

    /// Create an AI message
    pub fn ai(content: impl Into<String>) -> Self {
        ChatMessage::Ai {
            content: content.into(),
        }
    }

    /// Text payload of the message
    pub fn content(&self) -> &str {
        match self {
            ChatMessage::Human { content } | ChatMessage::Ai { content } => content,
        }
    }

    /// Message type tag (`human` or `ai`)
    pub fn message_type(&self) -> &'static str {
        match self {
            ChatMessage::Human { .. } => "human",
            ChatMessage::Ai { .. } => "ai",
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, ChatMessage::Human { .. })
    }

    pub fn is_ai(&self) -> bool {
        matches!(self, ChatMessage::Ai { .. })
    }
}
