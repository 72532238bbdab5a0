//! Gemini REST backend with Google Search grounding.
//!
//! One POST per query to `models/<model>:generateContent` with the
//! `google_search` tool enabled. The answer text and the grounding chunks
//! both come back in the first response candidate.
//!
//! API key: `[search] api_key` in config, falling back to the
//! `GEMINI_API_KEY` environment variable. Default model: `gemini-2.5-flash`.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use beacon_core::config::SearchConfig;

use crate::backend::{BackendAnswer, CitationCandidate, GenerativeBackend};
use crate::error::SearchError;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

// Wire format for the generateContent endpoint.

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    tools: Vec<Tool>,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Serialize)]
struct Tool {
    google_search: GoogleSearch,
}

// Serializes as `{}`; presence of the key is what enables grounding.
#[derive(Serialize)]
struct GoogleSearch {}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Deserialize)]
struct ResponseCandidate {
    #[serde(default)]
    content: Option<ResponseContent>,
    #[serde(default, rename = "groundingMetadata")]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct GroundingMetadata {
    #[serde(default, rename = "groundingChunks")]
    grounding_chunks: Vec<CitationCandidate>,
}

/// Gemini generateContent client.
pub struct GeminiBackend {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiBackend {
    /// Create a backend from configuration.
    ///
    /// Key priority: `config.api_key` over the `GEMINI_API_KEY` environment
    /// variable. Returns `None` when neither yields a non-blank key.
    pub fn from_config(config: &SearchConfig) -> Option<Self> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok());

        let key = api_key?.trim().to_string();
        if key.is_empty() {
            return None;
        }
        Some(Self::new(key).with_model(&config.model))
    }

    /// Create a backend with an explicit API key and the default model.
    pub fn new(api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            api_key: api_key.trim().to_string(),
            model: DEFAULT_MODEL.to_string(),
            client,
        }
    }

    /// Set the model (e.g. `gemini-2.5-flash`, `gemini-2.5-pro`).
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// The model this backend targets.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl GenerativeBackend for GeminiBackend {
    async fn generate(&self, prompt: &str) -> Result<BackendAnswer, SearchError> {
        let url = format!("{}/models/{}:generateContent", GEMINI_API_BASE, self.model);
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
            tools: vec![Tool {
                google_search: GoogleSearch {},
            }],
        };

        let res = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SearchError::Backend(format!("request failed: {}", e)))?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(SearchError::Backend(format!(
                "API error {}: {}",
                status, body
            )));
        }

        let parsed: GenerateResponse = res
            .json()
            .await
            .map_err(|e| SearchError::Backend(format!("response parse failed: {}", e)))?;

        let candidate = match parsed.candidates.into_iter().next() {
            Some(candidate) => candidate,
            None => {
                return Err(SearchError::Backend("no candidates returned".to_string()));
            }
        };

        let text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        let candidates = candidate
            .grounding_metadata
            .map(|metadata| metadata.grounding_chunks)
            .unwrap_or_default();

        tracing::debug!(
            model = %self.model,
            text_len = text.len(),
            grounding_chunks = candidates.len(),
            "Gemini generation complete"
        );

        Ok(BackendAnswer { text, candidates })
    }
}

// =============================================================================
// Tests
// =============================================================================
