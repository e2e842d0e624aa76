use crate::{DebounceFilter, DisplayWordTable, EmptyReadingPolicy, PhraseRules};

/// Everything the subtitle core needs that is not runtime state.
///
/// Every field has a default, so a config file only needs to list what it
/// overrides.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SubtitleConfig {
    pub debounce_window_ms: u64,
    pub empty_reading: EmptyReadingPolicy,
    pub words: DisplayWordTable,
    pub phrases: PhraseRules,
    /// When off, the overlay sink only ever receives `""`.
    pub overlay_enabled: bool,
    pub speech_enabled: bool,
}

impl Default for SubtitleConfig {
    fn default() -> Self {
        Self {
            debounce_window_ms: DebounceFilter::DEFAULT_WINDOW_MS,
            empty_reading: EmptyReadingPolicy::default(),
            words: DisplayWordTable::default(),
            phrases: PhraseRules::default(),
            overlay_enabled: true,
            speech_enabled: false,
        }
    }
}

impl SubtitleConfig {
    pub fn debounce_filter(&self) -> DebounceFilter {
        DebounceFilter::new(self.debounce_window_ms, self.empty_reading)
    }
}
