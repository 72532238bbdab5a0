//! Generative backend seam.
//!
//! The gateway talks to "something that answers a prompt with grounded
//! prose" through [`GenerativeBackend`]; the shipped implementation is
//! [`crate::gemini::GeminiBackend`], and tests substitute scripted doubles.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// One grounding citation as delivered by the backend, before validation.
///
/// Field names match the wire shape of grounding chunks, so backend
/// implementations can deserialize straight into this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationCandidate {
    /// Web citation payload. Absent for non-web grounding chunks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<WebCitation>,
}

impl CitationCandidate {
    /// Candidate carrying a complete web citation.
    pub fn from_web(uri: String, title: String) -> Self {
        Self {
            web: Some(WebCitation {
                uri: Some(uri),
                title: Some(title),
            }),
        }
    }
}

/// Web citation payload inside a grounding chunk. Either field may be
/// missing; validation drops incomplete citations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebCitation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Raw backend answer: generated prose plus unvalidated citations.
#[derive(Debug, Clone, Default)]
pub struct BackendAnswer {
    /// Generated answer text, unfiltered.
    pub text: String,
    /// Citation candidates in backend order.
    pub candidates: Vec<CitationCandidate>,
}

/// A web-grounded generative model that answers search prompts.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Execute one generation round trip for the given prompt.
    ///
    /// No timeout, retry, or caching semantics beyond what the
    /// implementation itself carries; the gateway issues exactly one call
    /// per executed query.
    async fn generate(&self, prompt: &str) -> Result<BackendAnswer, SearchError>;
}
