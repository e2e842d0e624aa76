use std::process::{Command, Stdio};

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("no speech backend configured")]
    Unavailable,
    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Speaks a sentence by handing it to an external TTS program as the last
/// argument, e.g. `say` on macOS or `espeak` elsewhere.
///
/// The child is not awaited on the calling thread; a non-zero exit is only
/// logged.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CommandSpeech {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandSpeech {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn platform_default() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("say")
        } else {
            Self::new("espeak")
        }
    }

    pub fn speak(&self, sentence: &str) -> Result<(), SpeechError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(sentence)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| SpeechError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let program = self.program.clone();
        std::thread::spawn(move || match child.wait() {
            Ok(status) if !status.success() => {
                tracing::warn!(%program, %status, "speech_exited_with_error");
            }
            Ok(_) => {}
            Err(error) => {
                tracing::warn!(%program, ?error, "speech_wait_failed");
            }
        });

        Ok(())
    }
}

impl Default for CommandSpeech {
    fn default() -> Self {
        Self::platform_default()
    }
}
