use crate::{
    GestureLabel, IdGenerator, SessionErrorEvent, SubtitleConfig, SubtitleFrame, SubtitleRuntime,
    Subtitles,
};

/// Drives [`Subtitles`] and pushes every visible change to a runtime.
///
/// The overlay sink only hears about changes: repeated emissions of the same
/// text are suppressed.
pub struct SubtitleSession<R: SubtitleRuntime> {
    subtitles: Subtitles,
    runtime: R,
    overlay_enabled: bool,
    speech_enabled: bool,
    last_overlay: String,
}

impl<R: SubtitleRuntime> SubtitleSession<R> {
    pub fn new(config: &SubtitleConfig, runtime: R) -> Self {
        Self::from_parts(Subtitles::new(config), config, runtime)
    }

    pub fn with_id_gen(
        config: &SubtitleConfig,
        runtime: R,
        id_gen: impl IdGenerator + 'static,
    ) -> Self {
        Self::from_parts(Subtitles::with_id_gen(config, id_gen), config, runtime)
    }

    fn from_parts(subtitles: Subtitles, config: &SubtitleConfig, runtime: R) -> Self {
        Self {
            subtitles,
            runtime,
            overlay_enabled: config.overlay_enabled,
            speech_enabled: config.speech_enabled,
            last_overlay: String::new(),
        }
    }

    pub fn tick(&mut self, raw: Option<&GestureLabel>, now_ms: i64) -> Option<GestureLabel> {
        let accepted = self.subtitles.tick(raw, now_ms)?;
        self.sync_overlay();
        Some(accepted)
    }

    pub fn undo_last(&mut self) {
        self.subtitles.undo_last();
        self.sync_overlay();
    }

    pub fn clear(&mut self) {
        self.subtitles.clear();
        self.sync_overlay();
    }

    pub fn commit(&mut self) -> Option<String> {
        let sentence = self.subtitles.commit()?;

        if let Some(entry) = self.subtitles.transcript().entries().last() {
            self.runtime.emit_committed(entry);
        }
        self.sync_overlay();

        if self.speech_enabled {
            if let Err(error) = self.runtime.speak(&sentence) {
                tracing::warn!(?error, sentence = %sentence, "speech_failed");
                self.runtime.emit_error(SessionErrorEvent::SpeechFailed {
                    sentence: sentence.clone(),
                    error: error.to_string(),
                });
            }
        }

        Some(sentence)
    }

    /// Forgets debounce history and the in-progress sentence so the next
    /// reading starts fresh. The transcript is kept.
    pub fn reset_input(&mut self) {
        self.subtitles.reset_input();
        self.sync_overlay();
    }

    pub fn reset_transcript(&mut self) {
        self.subtitles.reset_transcript();
        tracing::info!("transcript_reset");
    }

    pub fn export(&self) -> String {
        self.subtitles.export()
    }

    pub fn frame(&self) -> SubtitleFrame {
        let mut frame = self.subtitles.frame();
        if !self.overlay_enabled {
            frame.overlay.clear();
        }
        frame
    }

    pub fn overlay_enabled(&self) -> bool {
        self.overlay_enabled
    }

    pub fn set_overlay_enabled(&mut self, enabled: bool) {
        self.overlay_enabled = enabled;
        self.sync_overlay();
    }

    pub fn speech_enabled(&self) -> bool {
        self.speech_enabled
    }

    pub fn set_speech_enabled(&mut self, enabled: bool) {
        self.speech_enabled = enabled;
    }

    pub fn subtitles(&self) -> &Subtitles {
        &self.subtitles
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    fn sync_overlay(&mut self) {
        let text = if self.overlay_enabled {
            self.subtitles.current_text()
        } else {
            String::new()
        };

        if text != self.last_overlay {
            self.runtime.emit_overlay(&text);
            self.last_overlay = text;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::{SequentialIdGen, SpeechError, TranscriptEntry};

    #[derive(Default)]
    struct RecordingRuntime {
        overlays: Mutex<Vec<String>>,
        committed: Mutex<Vec<TranscriptEntry>>,
        errors: Mutex<Vec<SessionErrorEvent>>,
        spoken: Mutex<Vec<String>>,
        speech_available: bool,
    }

    impl RecordingRuntime {
        fn with_speech() -> Self {
            Self {
                speech_available: true,
                ..Default::default()
            }
        }

        fn overlays(&self) -> Vec<String> {
            self.overlays.lock().unwrap().clone()
        }
    }

    impl SubtitleRuntime for RecordingRuntime {
        fn emit_overlay(&self, text: &str) {
            self.overlays.lock().unwrap().push(text.to_string());
        }

        fn emit_committed(&self, entry: &TranscriptEntry) {
            self.committed.lock().unwrap().push(entry.clone());
        }

        fn emit_error(&self, event: SessionErrorEvent) {
            self.errors.lock().unwrap().push(event);
        }

        fn speak(&self, sentence: &str) -> Result<(), SpeechError> {
            if !self.speech_available {
                return Err(SpeechError::Unavailable);
            }
            self.spoken.lock().unwrap().push(sentence.to_string());
            Ok(())
        }
    }

    fn label(s: &str) -> GestureLabel {
        GestureLabel::new(s).unwrap()
    }

    fn session(
        config: SubtitleConfig,
        runtime: RecordingRuntime,
    ) -> SubtitleSession<RecordingRuntime> {
        SubtitleSession::with_id_gen(&config, runtime, SequentialIdGen::new())
    }

    #[test]
    fn overlay_follows_buffer() {
        let mut session = session(SubtitleConfig::default(), RecordingRuntime::default());
        session.tick(Some(&label("we")), 1000);
        session.tick(Some(&label("we")), 1100);
        session.tick(None, 1200);
        session.tick(Some(&label("made")), 2000);
        session.undo_last();
        session.clear();
        session.clear();

        assert_eq!(
            session.runtime().overlays(),
            vec!["we", "we made", "we", ""]
        );
    }

    #[test]
    fn commit_emits_entry_and_hides_overlay() {
        let mut session = session(SubtitleConfig::default(), RecordingRuntime::default());
        session.tick(Some(&label("this")), 1000);
        assert_eq!(session.commit().as_deref(), Some("This."));

        let committed = session.runtime().committed.lock().unwrap().clone();
        assert_eq!(
            committed,
            vec![TranscriptEntry {
                id: "0".into(),
                text: "This.".into(),
            }]
        );
        assert_eq!(session.runtime().overlays(), vec!["this", ""]);
        assert_eq!(session.export(), "This.");
    }

    #[test]
    fn empty_commit_emits_nothing() {
        let mut session = session(SubtitleConfig::default(), RecordingRuntime::default());
        assert_eq!(session.commit(), None);
        assert!(session.runtime().committed.lock().unwrap().is_empty());
        assert!(session.runtime().overlays().is_empty());
    }

    #[test]
    fn speech_is_only_used_when_enabled() {
        let mut session = session(SubtitleConfig::default(), RecordingRuntime::with_speech());
        session.tick(Some(&label("hello")), 1000);
        session.commit();
        assert!(session.runtime().spoken.lock().unwrap().is_empty());

        session.set_speech_enabled(true);
        session.tick(Some(&label("thank_you")), 2000);
        session.commit();
        assert_eq!(
            session.runtime().spoken.lock().unwrap().clone(),
            vec!["Thank you for watching!"]
        );
    }

    #[test]
    fn speech_failure_keeps_commit() {
        let config = SubtitleConfig {
            speech_enabled: true,
            ..Default::default()
        };
        let mut session = session(config, RecordingRuntime::default());
        session.tick(Some(&label("hello")), 1000);
        assert_eq!(
            session.commit().as_deref(),
            Some("Hello everyone, nice to meet you!")
        );

        assert_eq!(session.subtitles().transcript().len(), 1);
        let errors = session.runtime().errors.lock().unwrap().clone();
        assert_eq!(
            errors,
            vec![SessionErrorEvent::SpeechFailed {
                sentence: "Hello everyone, nice to meet you!".into(),
                error: "no speech backend configured".into(),
            }]
        );
    }

    #[test]
    fn disabled_overlay_hides_text() {
        let config = SubtitleConfig {
            overlay_enabled: false,
            ..Default::default()
        };
        let mut session = session(config, RecordingRuntime::default());
        session.tick(Some(&label("we")), 1000);
        assert!(session.runtime().overlays().is_empty());
        assert_eq!(session.frame().overlay, "");
        assert_eq!(session.frame().buffer, vec!["we".to_string()]);

        session.set_overlay_enabled(true);
        assert_eq!(session.runtime().overlays(), vec!["we"]);
        session.set_overlay_enabled(false);
        assert_eq!(session.runtime().overlays(), vec!["we", ""]);
    }

    #[test]
    fn reset_transcript_clears_export() {
        let mut session = session(SubtitleConfig::default(), RecordingRuntime::default());
        session.tick(Some(&label("this")), 1000);
        session.commit();
        session.reset_transcript();
        assert_eq!(session.export(), "");
        assert!(session.frame().transcript.is_empty());
    }

    #[test]
    fn reset_input_drops_buffer_and_debounce_history() {
        let mut session = session(SubtitleConfig::default(), RecordingRuntime::default());
        session.tick(Some(&label("this")), 1000);
        session.commit();
        session.tick(Some(&label("program")), 2000);

        session.reset_input();

        assert!(session.frame().buffer.is_empty());
        assert_eq!(
            session.runtime().overlays(),
            vec!["this", "", "program", ""]
        );
        assert_eq!(session.export(), "This.");
        assert!(session.tick(Some(&label("program")), 2100).is_some());
    }
}
