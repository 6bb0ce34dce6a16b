//! Dictionary lookup.
//!
//! Invoked only after a player accepts the definition offer. The engine
//! forwards the result for display and never interprets it; accepting the
//! offer has no effect on scoring.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Definitions and usage examples for a word.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDefinition {
    pub definitions: Vec<String>,
    pub examples: Vec<String>,
}

/// Dictionary seam. `None` means the word is unknown to the backend.
pub trait DefinitionLookup {
    fn lookup(&self, word: &str) -> Option<WordDefinition>;
}

/// In-memory lookup for tests and offline play.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StaticDefinitions {
    entries: FxHashMap<String, WordDefinition>,
}

impl StaticDefinitions {
    /// Create an empty lookup (every word unknown).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a definition entry.
    #[must_use]
    pub fn with_entry(
        mut self,
        word: &str,
        definitions: &[&str],
        examples: &[&str],
    ) -> Self {
        self.entries.insert(
            word.to_string(),
            WordDefinition {
                definitions: definitions.iter().map(|s| s.to_string()).collect(),
                examples: examples.iter().map(|s| s.to_string()).collect(),
            },
        );
        self
    }
}

impl DefinitionLookup for StaticDefinitions {
    fn lookup(&self, word: &str) -> Option<WordDefinition> {
        self.entries.get(word).cloned()
    }
}
