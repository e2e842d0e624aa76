mod buffer;
pub mod config;
mod debounce;
pub mod id;
mod label;
pub mod phrase;
mod runtime;
mod session;
mod speech;
mod subtitles;
mod transcript;
mod types;
mod words;

pub use buffer::SentenceBuffer;
pub use config::SubtitleConfig;
pub use debounce::{DebounceFilter, DebounceState, EmptyReadingPolicy};
pub use id::{IdGenerator, SequentialIdGen, UuidIdGen};
pub use label::GestureLabel;
pub use phrase::{PhraseRule, PhraseRules};
pub use runtime::{SessionErrorEvent, SubtitleRuntime};
pub use session::SubtitleSession;
pub use speech::{CommandSpeech, SpeechError};
pub use subtitles::Subtitles;
pub use transcript::{Transcript, TranscriptEntry};
pub use types::SubtitleFrame;
pub use words::{DisplayWord, DisplayWordTable};
