//! Error types for the MCP prompt adapter

use thiserror::Error;

/// Error codes reported alongside adapter errors
///
/// Standard JSON-RPC error codes plus adapter-specific codes, so callers
/// speaking MCP can surface them without remapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Standard JSON-RPC errors (-32xxx)
    /// Parse error: Invalid JSON
    ParseError = -32700,
    /// Invalid params
    InvalidParams = -32602,
    /// Internal error
    InternalError = -32603,

    // Adapter-specific errors (-32000 to -32099)
    /// The session collaborator failed
    SessionError = -32001,
    /// A prompt message cannot be represented locally
    UnsupportedMessage = -32020,
}

impl ErrorCode {
    /// Get the error code value
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Main error type for the adapter
#[derive(Debug, Error)]
pub enum AdapterError {
    // === Conversion errors ===
    /// Prompt message content is not text
    #[error("Unsupported prompt message content type: {0}")]
    UnsupportedContentType(String),

    /// Text prompt message with a role other than user or assistant
    #[error("Unsupported prompt message role: {0}")]
    UnsupportedRole(String),

    // === Session errors ===
    /// The session has no prompt with this name
    #[error("Prompt not found: {0}")]
    PromptNotFound(String),

    /// Prompt arguments could not be parsed
    #[error("Invalid prompt arguments: {0}")]
    InvalidArguments(String),

    /// The session collaborator failed to serve the request
    #[error("Session request failed: {0}")]
    SessionFailed(String),

    // === External errors ===
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the adapter
pub type Result<T> = std::result::Result<T, AdapterError>;

impl AdapterError {
    /// Get the error code for this error
    pub fn error_code(&self) -> ErrorCode {
        match self {
            AdapterError::UnsupportedContentType(_) => ErrorCode::UnsupportedMessage,
            AdapterError::UnsupportedRole(_) => ErrorCode::UnsupportedMessage,
            AdapterError::PromptNotFound(_) => ErrorCode::InvalidParams,
            AdapterError::InvalidArguments(_) => ErrorCode::InvalidParams,
            AdapterError::SessionFailed(_) => ErrorCode::SessionError,
            AdapterError::Io(_) => ErrorCode::InternalError,
            AdapterError::Json(_) => ErrorCode::ParseError,
        }
    }

    /// Check if this error is retryable
    ///
    /// The adapter never retries by itself; this only classifies the error
    /// for callers that have a retry policy of their own.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AdapterError::SessionFailed(_))
    }

    /// Check if this error is a client error (caused by invalid input)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AdapterError::UnsupportedContentType(_)
                | AdapterError::UnsupportedRole(_)
                | AdapterError::PromptNotFound(_)
                | AdapterError::InvalidArguments(_)
        )
    }

    // === Constructor helpers ===

    /// Create an unsupported content type error
    pub fn unsupported_content_type(content_type: impl Into<String>) -> Self {
        AdapterError::UnsupportedContentType(content_type.into())
    }

    /// Create an unsupported role error
    pub fn unsupported_role(role: impl Into<String>) -> Self {
        AdapterError::UnsupportedRole(role.into())
    }

    /// Create a prompt not found error
    pub fn prompt_not_found(name: impl Into<String>) -> Self {
        AdapterError::PromptNotFound(name.into())
    }

    /// Create an invalid arguments error
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        AdapterError::InvalidArguments(msg.into())
    }

    /// Create a session failure error
    pub fn session_failed(msg: impl Into<String>) -> Self {
        AdapterError::SessionFailed(msg.into())
    }
}
