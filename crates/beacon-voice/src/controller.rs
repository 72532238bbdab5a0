//! Dictation controller managing the voice search session lifecycle.
//!
//! The `DictationController` owns the platform recognizer (if one exists),
//! tracks the active session, and delivers exactly one trimmed transcript
//! per session to the configured consumer. Invalid requests are no-ops, not
//! errors: the UI can wire a mic button straight to `toggle()` without
//! guarding.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::recognizer::{RecognizerEvent, RecognizerSettings, SpeechRecognizer};
use crate::state::DictationStatus;

/// Message shown when the platform provides no speech recognizer.
pub const UNSUPPORTED_MESSAGE: &str = "Voice search is not supported on this device.";

/// A function that receives the finalized transcript of a session.
///
/// Called exactly once per session, with the trimmed transcript. The
/// transcript may be empty; the consumer decides whether to act on it.
pub type TranscriptConsumer = Box<dyn FnMut(String) + Send>;

/// Tracks one voice capture session from start request to end.
#[derive(Debug, Clone)]
pub struct DictationSession {
    /// Unique identifier for this session.
    pub id: Uuid,
    /// When the session was requested.
    pub started_at: DateTime<Utc>,
    /// Whether the transcript has already been handed to the consumer.
    pub delivered: bool,
}

impl DictationSession {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            delivered: false,
        }
    }
}

/// Single-threaded controller driving the dictation state machine.
///
/// All work happens inside `start`/`stop`/`toggle` and `handle_event`; the
/// controller never blocks and performs no I/O of its own. At most one
/// session is in flight at a time, tracked from the start request until the
/// recognizer reports `Ended` or `Error`.
pub struct DictationController {
    recognizer: Option<Box<dyn SpeechRecognizer>>,
    settings: RecognizerSettings,
    status: DictationStatus,
    session: Option<DictationSession>,
    consumer: TranscriptConsumer,
}

impl std::fmt::Debug for DictationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictationController")
            .field("supported", &self.recognizer.is_some())
            .field("settings", &self.settings)
            .field("status", &self.status)
            .field("session", &self.session)
            .finish()
    }
}

impl DictationController {
    /// Create a controller over an optional platform recognizer.
    ///
    /// Passing `None` means the platform has no speech capability: the
    /// controller settles into a permanent `Error` status carrying
    /// [`UNSUPPORTED_MESSAGE`] and every request becomes a no-op.
    pub fn new(
        settings: RecognizerSettings,
        recognizer: Option<Box<dyn SpeechRecognizer>>,
        consumer: TranscriptConsumer,
    ) -> Self {
        let status = if recognizer.is_some() {
            DictationStatus::Idle
        } else {
            tracing::warn!("Speech recognition unavailable on this platform");
            DictationStatus::Error(UNSUPPORTED_MESSAGE.to_string())
        };
        Self {
            recognizer,
            settings,
            status,
            session: None,
            consumer,
        }
    }

    /// Returns the current observable status.
    pub fn status(&self) -> &DictationStatus {
        &self.status
    }

    /// Returns whether a capture is currently active.
    pub fn is_listening(&self) -> bool {
        self.status.is_listening()
    }

    /// Returns whether the platform provided a recognizer at all.
    pub fn is_supported(&self) -> bool {
        self.recognizer.is_some()
    }

    /// Returns the in-flight session, if any.
    pub fn session(&self) -> Option<&DictationSession> {
        self.session.as_ref()
    }

    /// Request a new capture session.
    ///
    /// Valid from `Idle` or `Error` (starting clears the error once the
    /// recognizer confirms). A no-op while a session is already in flight
    /// or when recognition is unsupported.
    pub fn start(&mut self) {
        let recognizer = match self.recognizer.as_mut() {
            Some(recognizer) => recognizer,
            None => {
                tracing::debug!("Dictation start ignored: recognition unsupported");
                return;
            }
        };
        if self.session.is_some() {
            tracing::debug!("Dictation start ignored: session already in flight");
            return;
        }

        let session = DictationSession::new();
        tracing::info!(
            session_id = %session.id,
            language = %self.settings.language,
            "Dictation start requested"
        );
        self.session = Some(session);
        recognizer.request_start(&self.settings);
    }

    /// Request the end of the current capture session.
    ///
    /// A no-op unless the controller is `Listening`. The final transition
    /// back to `Idle` still arrives via `Ended` (possibly preceded by a
    /// last `Result`).
    pub fn stop(&mut self) {
        if !self.status.is_listening() {
            tracing::debug!("Dictation stop ignored: not listening");
            return;
        }
        if let Some(session) = &self.session {
            tracing::info!(session_id = %session.id, "Dictation stop requested");
        }
        if let Some(recognizer) = self.recognizer.as_mut() {
            recognizer.request_stop();
        }
    }

    /// Stop if listening, otherwise start. The mic-button entry point.
    pub fn toggle(&mut self) {
        if self.status.is_listening() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Feed a recognizer outcome into the state machine.
    ///
    /// Platform glue calls this for every event the recognizer emits.
    pub fn handle_event(&mut self, event: RecognizerEvent) {
        match event {
            RecognizerEvent::Started => {
                match &self.session {
                    Some(session) => {
                        tracing::info!(session_id = %session.id, "Dictation listening");
                    }
                    None => {
                        // Recognizer started without a request from us.
                        // Adopt the capture so stop() still works.
                        tracing::warn!("Recognizer started without a pending session");
                        self.session = Some(DictationSession::new());
                    }
                }
                // Starting clears any prior error message.
                self.status = DictationStatus::Listening;
            }
            RecognizerEvent::Result { transcripts } => {
                let session = match self.session.as_mut() {
                    Some(session) => session,
                    None => {
                        tracing::warn!("Transcript received with no active session");
                        return;
                    }
                };
                if session.delivered {
                    tracing::debug!(
                        session_id = %session.id,
                        "Duplicate transcript ignored"
                    );
                    return;
                }
                session.delivered = true;

                let transcript = transcripts
                    .last()
                    .map(|t| t.trim().to_string())
                    .unwrap_or_default();
                tracing::info!(
                    session_id = %session.id,
                    transcript_len = transcript.len(),
                    "Transcript delivered"
                );
                (self.consumer)(transcript);
            }
            RecognizerEvent::Error(code) => {
                if let Some(session) = self.session.take() {
                    tracing::warn!(
                        session_id = %session.id,
                        code = %code,
                        "Recognition error"
                    );
                } else {
                    tracing::warn!(code = %code, "Recognition error with no session");
                }
                self.status = DictationStatus::Error(code.message());
            }
            RecognizerEvent::Ended => {
                if let Some(session) = self.session.take() {
                    tracing::info!(session_id = %session.id, "Dictation session ended");
                }
                // An error status set during the session stays visible until
                // the next successful start; a plain listening session drops
                // back to idle.
                if self.status.is_listening() {
                    self.status = DictationStatus::Idle;
                }
            }
        }
    }
}

impl Drop for DictationController {
    fn drop(&mut self) {
        // Best-effort stop for an in-flight capture.
        if self.session.is_some() {
            if let Some(recognizer) = self.recognizer.as_mut() {
                recognizer.request_stop();
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
