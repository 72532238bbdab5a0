//! Dictation status reported to the UI layer.
//!
//! Transitions:
//! - Idle -> Listening (recognizer confirmed start)
//! - Listening -> Idle (session ended normally)
//! - Listening -> Error (recognition failed; message shown to the user)
//! - Error -> Listening (a fresh start succeeded, clearing the message)
//!
//! `Error` is idle-with-a-message: a new session can always be started
//! from it.

use std::fmt;

/// Observable state of the dictation controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictationStatus {
    /// No capture in progress. Ready to start.
    Idle,
    /// The platform recognizer is actively capturing speech.
    Listening,
    /// No capture in progress; the last session ended with a user-facing
    /// error message that stays visible until the next successful start.
    Error(String),
}

impl fmt::Display for DictationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictationStatus::Idle => write!(f, "Idle"),
            DictationStatus::Listening => write!(f, "Listening"),
            DictationStatus::Error(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl DictationStatus {
    /// Returns whether the controller is currently capturing speech.
    pub fn is_listening(&self) -> bool {
        matches!(self, DictationStatus::Listening)
    }

    /// Returns whether a new session may be started from this status.
    ///
    /// `Error` is recoverable; only an in-flight `Listening` session blocks
    /// a new start.
    pub fn can_start(&self) -> bool {
        !self.is_listening()
    }

    /// Returns the user-facing error message, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            DictationStatus::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(DictationStatus::Idle.to_string(), "Idle");
        assert_eq!(DictationStatus::Listening.to_string(), "Listening");
        assert_eq!(
            DictationStatus::Error("mic busy".to_string()).to_string(),
            "Error: mic busy"
        );
    }

    #[test]
    fn test_is_listening() {
        assert!(!DictationStatus::Idle.is_listening());
        assert!(DictationStatus::Listening.is_listening());
        assert!(!DictationStatus::Error("e".to_string()).is_listening());
    }

    #[test]
    fn test_can_start() {
        assert!(DictationStatus::Idle.can_start());
        assert!(!DictationStatus::Listening.can_start());
        // Error is recoverable
        assert!(DictationStatus::Error("e".to_string()).can_start());
    }

    #[test]
    fn test_error_message() {
        assert_eq!(DictationStatus::Idle.error_message(), None);
        assert_eq!(DictationStatus::Listening.error_message(), None);
        assert_eq!(
            DictationStatus::Error("denied".to_string()).error_message(),
            Some("denied")
        );
    }
}
