use std::{path::PathBuf, time::Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use signline_hand_pose::PosePipeline;
use signline_subtitle::{GestureLabel, SessionErrorEvent, SubtitleFrame, SubtitleSession};

use crate::{
    config::AppConfig,
    runtime::{ChannelRuntime, SessionEvent},
};

/// Keyboard stand-in for a camera: a number key "holds" a pose until another
/// key replaces it, and every tick reports the held pose to the detector.
pub struct App {
    session: SubtitleSession<ChannelRuntime>,
    pipeline: PosePipeline,
    vocabulary: Vec<String>,
    held: Option<usize>,
    started: Instant,
    export_path: PathBuf,
    pub overlay: String,
    pub notice: Option<String>,
    pub export_requested: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        config: &AppConfig,
        runtime: ChannelRuntime,
        export_path: PathBuf,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            session: SubtitleSession::new(&config.subtitle, runtime),
            pipeline: PosePipeline::from_config(&config.pose)?,
            vocabulary: config.vocabulary(),
            held: None,
            started: Instant::now(),
            export_path,
            overlay: String::new(),
            notice: None,
            export_requested: false,
            should_quit: false,
        })
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') | KeyCode::Char('0') => self.held = None,
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if index < self.vocabulary.len() {
                    self.held = Some(index);
                }
            }
            KeyCode::Enter => {
                self.session.commit();
            }
            KeyCode::Backspace => self.session.undo_last(),
            KeyCode::Char('x') => self.session.clear(),
            KeyCode::Char('c') => {
                self.held = None;
                self.pipeline.reset();
                self.session.reset_input();
                self.notify("input reset");
            }
            KeyCode::Char('r') => {
                self.session.reset_transcript();
                self.notify("transcript cleared");
            }
            KeyCode::Char('e') => self.export_requested = true,
            KeyCode::Char('s') => {
                let enabled = !self.session.speech_enabled();
                self.session.set_speech_enabled(enabled);
                self.notify(if enabled { "speech on" } else { "speech off" });
            }
            KeyCode::Char('o') => {
                let enabled = !self.session.overlay_enabled();
                self.session.set_overlay_enabled(enabled);
            }
            _ => {}
        }
    }

    pub fn handle_tick(&mut self) {
        let now_ms = i64::try_from(self.started.elapsed().as_millis()).unwrap_or(i64::MAX);
        self.tick_at(now_ms);
    }

    pub fn tick_at(&mut self, now_ms: i64) {
        let reading = self.held_label().map(str::to_string);
        let raw = GestureLabel::from_reading(self.pipeline.observe_label(reading.as_deref()));
        self.session.tick(raw.as_ref(), now_ms);
    }

    pub fn handle_session_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Overlay(text) => self.overlay = text,
            SessionEvent::Committed(entry) => {
                tracing::info!(id = %entry.id, text = %entry.text, "sentence_committed");
            }
            SessionEvent::Error(SessionErrorEvent::SpeechFailed { error, .. }) => {
                self.notify(format!("speech failed: {error}"));
            }
        }
    }

    /// Writes the transcript to the export path without blocking the event
    /// loop.
    pub async fn export(&mut self) {
        self.export_requested = false;
        let text = self.session.export();
        match signline_storage::export_transcript_async(&self.export_path, &text).await {
            Ok(()) => {
                tracing::info!(path = %self.export_path.display(), "transcript_exported");
                self.notify(format!("exported to {}", self.export_path.display()));
            }
            Err(error) => {
                tracing::error!(?error, "transcript_export_failed");
                self.notify(format!("export failed: {error}"));
            }
        }
    }

    fn notify(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    pub fn frame(&self) -> SubtitleFrame {
        self.session.frame()
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn held_index(&self) -> Option<usize> {
        self.held
    }

    pub fn held_label(&self) -> Option<&str> {
        self.held
            .and_then(|i| self.vocabulary.get(i))
            .map(String::as_str)
    }

    pub fn speech_enabled(&self) -> bool {
        self.session.speech_enabled()
    }

    pub fn overlay_enabled(&self) -> bool {
        self.session.overlay_enabled()
    }
}
