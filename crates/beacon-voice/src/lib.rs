//! Beacon Voice crate - dictation session state machine over a platform recognizer.
//!
//! Manages the lifecycle of a voice search session: Idle -> Listening -> Idle,
//! with a recoverable Error status carrying a user-facing message. The actual
//! speech capture is behind the `SpeechRecognizer` trait; platform glue feeds
//! recognizer outcomes back in as `RecognizerEvent`s.

pub mod controller;
pub mod recognizer;
pub mod state;

pub use controller::{DictationController, DictationSession, TranscriptConsumer};
pub use recognizer::{
    RecognitionErrorCode, RecognizerEvent, RecognizerSettings, SpeechRecognizer,
};
pub use state::DictationStatus;
