use crate::{SpeechError, TranscriptEntry};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionErrorEvent {
    /// The sentence stays committed; only the spoken output was lost.
    SpeechFailed { sentence: String, error: String },
}

/// Output sinks for a [`crate::SubtitleSession`].
///
/// Implementations must not block for long: the session calls these inline
/// from its single event loop.
pub trait SubtitleRuntime: Send {
    fn emit_overlay(&self, text: &str);
    fn emit_committed(&self, entry: &TranscriptEntry);
    fn emit_error(&self, event: SessionErrorEvent);

    fn speak(&self, _sentence: &str) -> Result<(), SpeechError> {
        Err(SpeechError::Unavailable)
    }
}
