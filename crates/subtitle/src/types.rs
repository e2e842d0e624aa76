use crate::TranscriptEntry;

/// Complete snapshot of subtitle state at a point in time.
///
/// This is the rendering contract: everything a UI layer needs to draw one
/// frame, whether that UI is the terminal simulator, a replay dump, or a test
/// assertion. Produced by `Subtitles::frame()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "specta", derive(specta::Type))]
pub struct SubtitleFrame {
    /// Words in the in-progress sentence, joined by single spaces.
    pub overlay: String,
    pub buffer: Vec<String>,
    pub transcript: Vec<TranscriptEntry>,
}
