//! Read-only knowledge base of known terms.
//!
//! # Format
//! ```json
//! {
//!   "Photosynthesis": { "description": "Conversion of light into chemical energy.", "role": "process" }
//! }
//! ```
//!
//! Keys are matched case-insensitively.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::KnowledgeError;

const BUILTIN: &str = include_str!("../data/knowledge_base.json");

/// What the knowledge base knows about one term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Term dictionary injected into the generator.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    entries: HashMap<String, KnowledgeEntry>,
}

impl KnowledgeBase {
    /// Knowledge base with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Knowledge base shipped with the crate.
    pub fn builtin() -> Result<Self, KnowledgeError> {
        Self::from_json(BUILTIN)
    }

    pub fn from_json(json: &str) -> Result<Self, KnowledgeError> {
        let raw: HashMap<String, KnowledgeEntry> = serde_json::from_str(json)?;
        Ok(raw.into_iter().collect())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, KnowledgeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn get(&self, term: &str) -> Option<&KnowledgeEntry> {
        self.entries.get(&term.to_lowercase())
    }

    pub fn role(&self, term: &str) -> Option<&str> {
        self.get(term).and_then(|e| e.role.as_deref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, KnowledgeEntry)> for KnowledgeBase {
    fn from_iter<I: IntoIterator<Item = (String, KnowledgeEntry)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(term, entry)| (term.to_lowercase(), entry))
                .collect(),
        }
    }
}
