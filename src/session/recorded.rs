//! Recorded prompt session
//!
//! Replays `prompts/get` results captured from an MCP server. The catalog
//! file looks like:
//!
//! ```json
//! {
//!   "prompts": {
//!     "code_review": {
//!       "description": "Ask for a code review",
//!       "messages": [
//!         {"role": "user", "content": {"type": "text", "text": "Please review this"}}
//!       ]
//!     }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::PromptSession;
use crate::types::{AdapterError, GetPromptResult, PromptArguments, Result};

/// On-disk catalog of recorded prompts
///
/// Results stay raw JSON until requested, so one bad recording only
/// breaks its own prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptCatalog {
    /// Recorded `prompts/get` results keyed by prompt name
    #[serde(default)]
    pub prompts: BTreeMap<String, serde_json::Value>,
}

/// Session that serves prompts from a recorded catalog
///
/// Recordings are already rendered, so arguments are accepted and logged
/// but do not change the result. A recording is parsed when its prompt is
/// fetched; parse failures surface as `AdapterError::Json` from
/// `get_prompt`.
#[derive(Debug, Clone, Default)]
pub struct RecordedPromptSession {
    catalog: PromptCatalog,
}

impl RecordedPromptSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session from an already loaded catalog
    pub fn from_catalog(catalog: PromptCatalog) -> Self {
        Self { catalog }
    }

    /// Parse a catalog from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: PromptCatalog = serde_json::from_str(json)?;
        Ok(Self::from_catalog(catalog))
    }

    /// Load a catalog file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let session = Self::from_json(&content)?;

        tracing::debug!(
            path = %path.display(),
            prompt_count = session.catalog.prompts.len(),
            "Loaded prompt catalog"
        );

        Ok(session)
    }

    /// Record (or replace) the result for a prompt
    pub fn insert(&mut self, name: impl Into<String>, result: GetPromptResult) -> Result<()> {
        let value = serde_json::to_value(result)?;
        self.catalog.prompts.insert(name.into(), value);
        Ok(())
    }

    /// Names of all recorded prompts, sorted
    pub fn prompt_names(&self) -> impl Iterator<Item = &str> {
        self.catalog.prompts.keys().map(String::as_str)
    }
}

#[async_trait]
impl PromptSession for RecordedPromptSession {
    async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<&PromptArguments>,
    ) -> Result<GetPromptResult> {
        tracing::debug!(
            prompt = %name,
            argument_keys = ?arguments.map(|args| args.keys().collect::<Vec<_>>()),
            "Serving recorded prompt"
        );

        let recorded = self
            .catalog
            .prompts
            .get(name)
            .ok_or_else(|| AdapterError::prompt_not_found(name))?;

        GetPromptResult::deserialize(recorded).map_err(|e| {
            tracing::warn!(prompt = %name, error = %e, "Recorded prompt is malformed");
            AdapterError::from(e)
        })
    }
}
