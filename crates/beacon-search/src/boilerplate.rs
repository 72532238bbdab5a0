//! Boilerplate preamble filter for generated answers.
//!
//! Grounded generation occasionally prefixes its answer with model
//! self-description ("I am a large language model...") instead of content.
//! The filter applies an ordered pattern list to strip the known preambles:
//! each pattern is applied once, to the output of the previous one, and the
//! result is whitespace-trimmed. Unmatched text passes through untouched.

use regex::Regex;

use beacon_core::config::default_boilerplate_patterns;

use crate::error::SearchError;

/// Ordered, compiled boilerplate patterns.
#[derive(Debug)]
pub struct BoilerplateFilter {
    patterns: Vec<Regex>,
}

impl BoilerplateFilter {
    /// Compile a pattern list into a filter.
    ///
    /// Order is preserved and significant: anchored preamble patterns are
    /// expected before any unanchored catch-all.
    pub fn new(patterns: &[String]) -> Result<Self, SearchError> {
        let compiled = patterns
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|e| SearchError::InvalidPattern {
                    pattern: p.clone(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns: compiled })
    }

    /// Strip boilerplate from an answer and trim surrounding whitespace.
    ///
    /// Each pattern removes at most its first match. Text matching no
    /// pattern comes back unchanged apart from the outer trim.
    pub fn apply(&self, text: &str) -> String {
        let mut cleaned = text.to_string();
        for pattern in &self.patterns {
            cleaned = pattern.replace(&cleaned, "").into_owned();
        }
        cleaned.trim().to_string()
    }
}

impl Default for BoilerplateFilter {
    fn default() -> Self {
        Self::new(&default_boilerplate_patterns()).expect("stock boilerplate patterns compile")
    }
}

// =============================================================================
// Tests
// =============================================================================
