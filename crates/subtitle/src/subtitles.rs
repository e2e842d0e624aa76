use crate::{
    DebounceFilter, DisplayWordTable, GestureLabel, IdGenerator, PhraseRules, SentenceBuffer,
    SubtitleConfig, SubtitleFrame, Transcript,
};

/// The gesture-to-sentence state machine.
///
/// Owns the debounce filter, the in-progress sentence and the committed
/// transcript. Every operation is synchronous and infallible; callers drive
/// it one tick or user action at a time.
#[derive(Debug)]
pub struct Subtitles {
    debounce: DebounceFilter,
    buffer: SentenceBuffer,
    transcript: Transcript,
    words: DisplayWordTable,
    phrases: PhraseRules,
}

impl Subtitles {
    pub fn new(config: &SubtitleConfig) -> Self {
        Self::with_transcript(config, Transcript::new())
    }

    pub fn with_id_gen(config: &SubtitleConfig, id_gen: impl IdGenerator + 'static) -> Self {
        Self::with_transcript(config, Transcript::with_id_gen(id_gen))
    }

    fn with_transcript(config: &SubtitleConfig, transcript: Transcript) -> Self {
        Self {
            debounce: config.debounce_filter(),
            buffer: SentenceBuffer::new(),
            transcript,
            words: config.words.clone(),
            phrases: config.phrases.clone(),
        }
    }

    // ── Gesture intake ──────────────────────────────────────────────────────

    pub fn try_accept(&mut self, raw: Option<&GestureLabel>, now_ms: i64) -> Option<GestureLabel> {
        self.debounce.try_accept(raw, now_ms)
    }

    pub fn append(&mut self, label: &GestureLabel) {
        let word = self.words.lookup(label);
        tracing::debug!(label = %label, word = %word, "word_appended");
        self.buffer.push(word);
    }

    /// `try_accept` followed by `append` on acceptance.
    pub fn tick(&mut self, raw: Option<&GestureLabel>, now_ms: i64) -> Option<GestureLabel> {
        let accepted = self.try_accept(raw, now_ms)?;
        tracing::debug!(label = %accepted, now_ms, "gesture_accepted");
        self.append(&accepted);
        Some(accepted)
    }

    // ── Buffer editing ──────────────────────────────────────────────────────

    pub fn undo_last(&mut self) {
        if let Some(word) = self.buffer.pop() {
            tracing::debug!(word = %word, "word_undone");
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn current_text(&self) -> String {
        self.buffer.text()
    }

    pub fn buffer(&self) -> &SentenceBuffer {
        &self.buffer
    }

    // ── Transcript ──────────────────────────────────────────────────────────

    /// Expands the buffer into a sentence and appends it to the transcript.
    /// `None` (and no change) when the buffer is empty.
    pub fn commit(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }

        let raw = self.buffer.take().join(" ");
        let sentence = self.phrases.expand(&raw);
        let entry = self.transcript.append(sentence.clone());
        tracing::debug!(id = %entry.id, raw = %raw, sentence = %sentence, "sentence_committed");
        Some(sentence)
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn reset_transcript(&mut self) {
        self.transcript.reset();
    }

    pub fn export(&self) -> String {
        self.transcript.to_text()
    }

    /// Forgets debounce history and the in-progress sentence; the transcript
    /// is kept.
    pub fn reset_input(&mut self) {
        self.debounce.reset();
        self.buffer.clear();
    }

    pub fn frame(&self) -> SubtitleFrame {
        SubtitleFrame {
            overlay: self.current_text(),
            buffer: self.buffer.words().to_vec(),
            transcript: self.transcript.entries().to_vec(),
        }
    }
}

impl Default for Subtitles {
    fn default() -> Self {
        Self::new(&SubtitleConfig::default())
    }
}
