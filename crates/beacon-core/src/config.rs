use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{BeaconError, Result};

/// Top-level configuration for the Beacon application.
///
/// Loaded from `~/.beacon/config.toml` by default. Each section corresponds
/// to one stage of the query-to-presentation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeaconConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub voice: VoiceConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
}

impl Default for BeaconConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            voice: VoiceConfig::default(),
            search: SearchConfig::default(),
            sources: SourcesConfig::default(),
        }
    }
}

impl BeaconConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: BeaconConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| BeaconError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Voice dictation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// BCP 47 language tag handed to the platform recognizer.
    pub language: String,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
        }
    }
}

/// Generative search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Backend model identifier.
    pub model: String,
    /// API key for the backend. When unset, the `GEMINI_API_KEY` environment
    /// variable is consulted instead.
    pub api_key: Option<String>,
    /// Ordered regex patterns stripped from the start of generated answers
    /// before display. Each pattern is applied once, in sequence.
    pub boilerplate_patterns: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            api_key: None,
            boilerplate_patterns: default_boilerplate_patterns(),
        }
    }
}

/// The stock boilerplate preamble patterns.
///
/// The first three anchor to the start of the answer and consume trailing
/// whitespace; the last matches anywhere and swallows through to the end of
/// the text (the model occasionally emits its self-description mid-answer
/// and never recovers). The list is heuristic and grows as new preamble
/// variants show up in the wild.
pub fn default_boilerplate_patterns() -> Vec<String> {
    vec![
        r"(?i)^I am a large language model, trained by Google\.\s*".to_string(),
        r"(?i)^I am currently processing your request and preparing a response\.\s*".to_string(),
        r"(?i)^My purpose is to provide information, answer questions, and assist with a variety of tasks by generating human-like text\.\s*".to_string(),
        r"(?is)I am a large language model, trained by Google\. I am currently processing your request.*".to_string(),
    ]
}

/// Source identity (breadcrumb + favicon) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Hosts treated as vendor redirect wrappers. A source URL containing
    /// any of these gets a label + site-name breadcrumb instead of a
    /// host/path one.
    pub redirect_domains: Vec<String>,
    /// Breadcrumb label shown for redirect-wrapped sources.
    pub redirect_label: String,
    /// Favicon size in pixels requested from the icon service.
    pub icon_size: u32,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            redirect_domains: vec!["vertexaisearch.cloud.google.com".to_string()],
            redirect_label: "vertex".to_string(),
            icon_size: 16,
        }
    }
}
