//! Platform speech-recognition seam.
//!
//! Beacon never talks to a microphone itself. The host platform implements
//! `SpeechRecognizer`, and its glue code feeds outcomes back into the
//! `DictationController` as `RecognizerEvent`s. Both trait methods are
//! requests: the definitive state change always arrives as an event.

use std::fmt;

use beacon_core::config::VoiceConfig;

/// Capture settings handed to the platform recognizer on every start.
///
/// Sessions are always single-shot and final-results-only; only the
/// language is configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizerSettings {
    /// BCP 47 language tag, e.g. "en-US".
    pub language: String,
    /// Whether capture continues across utterances. Always `false`: one
    /// utterance per session.
    pub continuous: bool,
    /// Whether interim (non-final) transcripts are delivered. Always
    /// `false`: the controller only ever sees finalized text.
    pub interim_results: bool,
}

impl RecognizerSettings {
    /// Create single-shot, final-results-only settings for a language.
    pub fn new(language: String) -> Self {
        Self {
            language,
            continuous: false,
            interim_results: false,
        }
    }
}

impl From<&VoiceConfig> for RecognizerSettings {
    fn from(config: &VoiceConfig) -> Self {
        Self::new(config.language.clone())
    }
}

/// Recognition failure reported by the platform recognizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionErrorCode {
    /// No speech was detected before the recognizer gave up.
    NoSpeech,
    /// The microphone could not be captured.
    AudioCapture,
    /// The user denied microphone permission.
    NotAllowed,
    /// Any other platform-specific failure code.
    Other(String),
}

impl RecognitionErrorCode {
    /// Map a raw platform error code to a known variant.
    pub fn from_code(code: &str) -> Self {
        match code {
            "no-speech" => RecognitionErrorCode::NoSpeech,
            "audio-capture" => RecognitionErrorCode::AudioCapture,
            "not-allowed" => RecognitionErrorCode::NotAllowed,
            other => RecognitionErrorCode::Other(other.to_string()),
        }
    }

    /// The user-facing message shown for this failure.
    pub fn message(&self) -> String {
        match self {
            RecognitionErrorCode::NoSpeech | RecognitionErrorCode::AudioCapture => {
                "Couldn't hear you. Please try again.".to_string()
            }
            RecognitionErrorCode::NotAllowed => {
                "Microphone permission denied. Please enable it in your settings.".to_string()
            }
            RecognitionErrorCode::Other(code) => format!("An error occurred: {}", code),
        }
    }
}

impl fmt::Display for RecognitionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecognitionErrorCode::NoSpeech => write!(f, "no-speech"),
            RecognitionErrorCode::AudioCapture => write!(f, "audio-capture"),
            RecognitionErrorCode::NotAllowed => write!(f, "not-allowed"),
            RecognitionErrorCode::Other(code) => write!(f, "{}", code),
        }
    }
}

/// Outcome delivered asynchronously by the platform recognizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognizerEvent {
    /// Capture actually began.
    Started,
    /// Finalized transcripts captured so far; the most recent entry is the
    /// utterance that just completed.
    Result { transcripts: Vec<String> },
    /// Recognition failed; capture is over.
    Error(RecognitionErrorCode),
    /// Capture stopped, whether normally or after an error.
    Ended,
}

/// Platform speech-capture capability consumed by the dictation controller.
///
/// Implementations must not block in either method; they acknowledge the
/// request and report what actually happened through `RecognizerEvent`s.
pub trait SpeechRecognizer: Send {
    /// Ask the platform to begin capturing one utterance.
    fn request_start(&mut self, settings: &RecognizerSettings);

    /// Ask the platform to stop capturing.
    fn request_stop(&mut self);
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_are_single_shot() {
        let settings = RecognizerSettings::new("en-US".to_string());
        assert_eq!(settings.language, "en-US");
        assert!(!settings.continuous);
        assert!(!settings.interim_results);
    }

    #[test]
    fn test_settings_from_voice_config() {
        let config = VoiceConfig {
            language: "fr-FR".to_string(),
        };
        let settings = RecognizerSettings::from(&config);
        assert_eq!(settings.language, "fr-FR");
        assert!(!settings.continuous);
        assert!(!settings.interim_results);
    }

    #[test]
    fn test_error_code_from_platform_code() {
        assert_eq!(
            RecognitionErrorCode::from_code("no-speech"),
            RecognitionErrorCode::NoSpeech
        );
        assert_eq!(
            RecognitionErrorCode::from_code("audio-capture"),
            RecognitionErrorCode::AudioCapture
        );
        assert_eq!(
            RecognitionErrorCode::from_code("not-allowed"),
            RecognitionErrorCode::NotAllowed
        );
        assert_eq!(
            RecognitionErrorCode::from_code("network"),
            RecognitionErrorCode::Other("network".to_string())
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RecognitionErrorCode::NoSpeech.message(),
            "Couldn't hear you. Please try again."
        );
        assert_eq!(
            RecognitionErrorCode::AudioCapture.message(),
            "Couldn't hear you. Please try again."
        );
        assert_eq!(
            RecognitionErrorCode::NotAllowed.message(),
            "Microphone permission denied. Please enable it in your settings."
        );
        assert_eq!(
            RecognitionErrorCode::Other("network".to_string()).message(),
            "An error occurred: network"
        );
    }

    #[test]
    fn test_error_code_display_is_wire_code() {
        assert_eq!(RecognitionErrorCode::NoSpeech.to_string(), "no-speech");
        assert_eq!(RecognitionErrorCode::NotAllowed.to_string(), "not-allowed");
        assert_eq!(
            RecognitionErrorCode::Other("aborted".to_string()).to_string(),
            "aborted"
        );
    }
}
