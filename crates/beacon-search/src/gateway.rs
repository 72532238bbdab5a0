//! Search gateway: one query in, one filtered and cited result out.
//!
//! The gateway owns the prompt template, the boilerplate filter, and the
//! citation validation step. It issues exactly one backend round trip per
//! executed query and never retries, dedupes, or caches; overlapping calls
//! are independent and callers discard stale results themselves.

use beacon_core::config::SearchConfig;

use crate::backend::{CitationCandidate, GenerativeBackend};
use crate::boilerplate::BoilerplateFilter;
use crate::error::SearchError;
use crate::types::{SearchResult, Source};

/// Wrap a user query in the fixed search instruction.
fn enhance_query(query: &str) -> String {
    format!(
        "Provide a comprehensive and detailed answer for the following query, \
         citing multiple web sources. Query: \"{}\"",
        query
    )
}

/// Keep only candidates carrying a complete web citation, in arrival order.
fn validate_sources(candidates: Vec<CitationCandidate>) -> Vec<Source> {
    let total = candidates.len();
    let sources: Vec<Source> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let web = candidate.web?;
            match (web.uri, web.title) {
                (Some(uri), Some(title)) if !uri.is_empty() && !title.is_empty() => {
                    Some(Source { uri, title })
                }
                _ => None,
            }
        })
        .collect();

    if sources.len() < total {
        tracing::debug!(
            dropped = total - sources.len(),
            kept = sources.len(),
            "Dropped incomplete citation candidates"
        );
    }
    sources
}

/// Executes queries against a generative backend and post-processes the
/// answer into a [`SearchResult`].
pub struct SearchGateway {
    backend: Box<dyn GenerativeBackend>,
    filter: BoilerplateFilter,
}

impl SearchGateway {
    /// Create a gateway with the stock boilerplate filter.
    pub fn new(backend: Box<dyn GenerativeBackend>) -> Self {
        Self {
            backend,
            filter: BoilerplateFilter::default(),
        }
    }

    /// Create a gateway with filter patterns taken from configuration.
    pub fn with_config(
        backend: Box<dyn GenerativeBackend>,
        config: &SearchConfig,
    ) -> Result<Self, SearchError> {
        Ok(Self {
            backend,
            filter: BoilerplateFilter::new(&config.boilerplate_patterns)?,
        })
    }

    /// Execute one search round trip.
    ///
    /// The query is trimmed first; an empty query is refused without a
    /// backend call. On success the result carries the filtered answer text
    /// and the validated citations. On failure the error replaces the
    /// result entirely; there is no partial output.
    pub async fn execute(&self, query: &str) -> Result<SearchResult, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        tracing::info!(query_len = query.len(), "Search started");

        let prompt = enhance_query(query);
        let answer = self.backend.generate(&prompt).await.inspect_err(|e| {
            tracing::warn!(error = %e, "Search backend call failed");
        })?;

        let text = self.filter.apply(&answer.text);
        let sources = validate_sources(answer.candidates);

        tracing::info!(
            text_len = text.len(),
            source_count = sources.len(),
            "Search complete"
        );

        Ok(SearchResult { text, sources })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendAnswer;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Backend double returning a fixed answer and recording the prompt.
    struct StaticBackend {
        answer: BackendAnswer,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    impl StaticBackend {
        fn boxed(answer: BackendAnswer) -> (Box<dyn GenerativeBackend>, Arc<Mutex<Vec<String>>>) {
            let prompts = Arc::new(Mutex::new(Vec::new()));
            let backend = Self {
                answer,
                prompts: Arc::clone(&prompts),
            };
            (Box::new(backend), prompts)
        }
    }

    #[async_trait]
    impl GenerativeBackend for StaticBackend {
        async fn generate(&self, prompt: &str) -> Result<BackendAnswer, SearchError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.answer.clone())
        }
    }

    /// Backend double that always fails.
    struct FailingBackend;

    #[async_trait]
    impl GenerativeBackend for FailingBackend {
        async fn generate(&self, _prompt: &str) -> Result<BackendAnswer, SearchError> {
            Err(SearchError::Backend("connection refused".to_string()))
        }
    }

    fn answer(text: &str, candidates: Vec<CitationCandidate>) -> BackendAnswer {
        BackendAnswer {
            text: text.to_string(),
            candidates,
        }
    }

    // ---- Query handling ----

    #[tokio::test]
    async fn test_empty_query_is_refused_without_backend_call() {
        let (backend, prompts) = StaticBackend::boxed(answer("unused", vec![]));
        let gateway = SearchGateway::new(backend);

        for query in ["", "   ", "\n\t "] {
            let result = gateway.execute(query).await;
            assert!(matches!(result, Err(SearchError::EmptyQuery)));
        }
        assert!(prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_query_is_trimmed_and_wrapped_in_template() {
        let (backend, prompts) = StaticBackend::boxed(answer("An answer.", vec![]));
        let gateway = SearchGateway::new(backend);

        gateway.execute("  rust lifetimes  ").await.unwrap();

        let prompts = prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(
            prompts[0],
            "Provide a comprehensive and detailed answer for the following query, \
             citing multiple web sources. Query: \"rust lifetimes\""
        );
    }

    // ---- Filtering and validation ----

    #[tokio::test]
    async fn test_boilerplate_is_stripped_from_answer() {
        let (backend, _) = StaticBackend::boxed(answer(
            "I am a large language model, trained by Google. Lifetimes bound borrows.",
            vec![],
        ));
        let gateway = SearchGateway::new(backend);

        let result = gateway.execute("rust lifetimes").await.unwrap();
        assert_eq!(result.text, "Lifetimes bound borrows.");
    }

    #[tokio::test]
    async fn test_incomplete_citations_are_dropped_in_order() {
        let (backend, _) = StaticBackend::boxed(answer(
            "Answer.",
            vec![
                CitationCandidate::from_web(
                    "https://first.example".to_string(),
                    "First".to_string(),
                ),
                // Non-web chunk
                CitationCandidate::default(),
                // Missing title
                CitationCandidate {
                    web: Some(crate::backend::WebCitation {
                        uri: Some("https://no-title.example".to_string()),
                        title: None,
                    }),
                },
                // Empty uri
                CitationCandidate {
                    web: Some(crate::backend::WebCitation {
                        uri: Some(String::new()),
                        title: Some("Empty uri".to_string()),
                    }),
                },
                CitationCandidate::from_web(
                    "https://second.example".to_string(),
                    "Second".to_string(),
                ),
            ],
        ));
        let gateway = SearchGateway::new(backend);

        let result = gateway.execute("anything").await.unwrap();
        assert_eq!(
            result.sources,
            vec![
                Source::new("https://first.example".to_string(), "First".to_string()),
                Source::new("https://second.example".to_string(), "Second".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_no_citations_yields_empty_sources() {
        let (backend, _) = StaticBackend::boxed(answer("Uncited answer.", vec![]));
        let gateway = SearchGateway::new(backend);

        let result = gateway.execute("anything").await.unwrap();
        assert_eq!(result.text, "Uncited answer.");
        assert!(result.sources.is_empty());
    }

    // ---- Errors ----

    #[tokio::test]
    async fn test_backend_failure_propagates() {
        let gateway = SearchGateway::new(Box::new(FailingBackend));
        let result = gateway.execute("anything").await;
        match result {
            Err(SearchError::Backend(msg)) => assert_eq!(msg, "connection refused"),
            other => panic!("Expected Backend error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_with_config_rejects_bad_pattern() {
        let mut config = SearchConfig::default();
        config.boilerplate_patterns.push("[unclosed".to_string());
        let (backend, _) = StaticBackend::boxed(answer("x", vec![]));
        let result = SearchGateway::with_config(backend, &config);
        assert!(matches!(
            result.map(|_| ()),
            Err(SearchError::InvalidPattern { .. })
        ));
    }

    #[tokio::test]
    async fn test_with_config_uses_configured_patterns() {
        let mut config = SearchConfig::default();
        config.boilerplate_patterns = vec![r"(?i)^Disclaimer:\s*".to_string()];
        let (backend, _) = StaticBackend::boxed(answer("Disclaimer: the real answer.", vec![]));
        let gateway = SearchGateway::with_config(backend, &config).unwrap();

        let result = gateway.execute("anything").await.unwrap();
        assert_eq!(result.text, "the real answer.");
    }
}
