//! Data carriers for executed searches.

use serde::{Deserialize, Serialize};

/// A validated web citation attached to a generated answer.
///
/// Both fields are non-empty by construction: candidates missing either one
/// are dropped during validation and never reach consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Resolvable link to the cited page.
    pub uri: String,
    /// Human-readable page title.
    pub title: String,
}

impl Source {
    /// Create a source from a uri and title.
    pub fn new(uri: String, title: String) -> Self {
        Self { uri, title }
    }
}

/// The outcome of one executed search.
///
/// Produced once per query and never mutated; a subsequent query replaces
/// the whole value rather than merging into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Display text after boilerplate filtering, in block markup.
    pub text: String,
    /// Validated citations in backend arrival order.
    pub sources: Vec<Source>,
}
