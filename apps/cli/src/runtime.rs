use signline_subtitle::{
    CommandSpeech, SessionErrorEvent, SpeechError, SubtitleRuntime, TranscriptEntry,
};
use tokio::sync::mpsc;

pub enum SessionEvent {
    Overlay(String),
    Committed(TranscriptEntry),
    Error(SessionErrorEvent),
}

/// Forwards session output to the TUI event loop.
pub struct ChannelRuntime {
    tx: mpsc::UnboundedSender<SessionEvent>,
    speech: Option<CommandSpeech>,
}

impl ChannelRuntime {
    pub fn new(tx: mpsc::UnboundedSender<SessionEvent>, speech: Option<CommandSpeech>) -> Self {
        Self { tx, speech }
    }
}

impl SubtitleRuntime for ChannelRuntime {
    fn emit_overlay(&self, text: &str) {
        let _ = self.tx.send(SessionEvent::Overlay(text.to_string()));
    }

    fn emit_committed(&self, entry: &TranscriptEntry) {
        let _ = self.tx.send(SessionEvent::Committed(entry.clone()));
    }

    fn emit_error(&self, event: SessionErrorEvent) {
        let _ = self.tx.send(SessionEvent::Error(event));
    }

    fn speak(&self, sentence: &str) -> Result<(), SpeechError> {
        match &self.speech {
            Some(speech) => speech.speak(sentence),
            None => Err(SpeechError::Unavailable),
        }
    }
}

/// Prints committed sentences to stdout as they happen; used by `replay`.
pub struct PrintRuntime {
    speech: Option<CommandSpeech>,
    quiet: bool,
}

impl PrintRuntime {
    pub fn new(speech: Option<CommandSpeech>, quiet: bool) -> Self {
        Self { speech, quiet }
    }
}

impl SubtitleRuntime for PrintRuntime {
    fn emit_overlay(&self, text: &str) {
        tracing::debug!(text, "overlay");
    }

    fn emit_committed(&self, entry: &TranscriptEntry) {
        if !self.quiet {
            println!("{}", entry.text);
        }
    }

    fn emit_error(&self, event: SessionErrorEvent) {
        match event {
            SessionErrorEvent::SpeechFailed { sentence, error } => {
                eprintln!("could not speak {sentence:?}: {error}");
            }
        }
    }

    fn speak(&self, sentence: &str) -> Result<(), SpeechError> {
        match &self.speech {
            Some(speech) => speech.speak(sentence),
            None => Err(SpeechError::Unavailable),
        }
    }
}
