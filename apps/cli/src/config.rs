use std::path::PathBuf;

use signline_hand_pose::{PoseConfig, SmoothingConfig};
use signline_storage::{SettingsStore, paths};
use signline_subtitle::{CommandSpeech, EmptyReadingPolicy, SubtitleConfig};

/// Everything `signline` reads from its config file.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub pose: PoseConfig,
    pub subtitle: SubtitleConfig,
    /// Text-to-speech program. Unset means the platform default (`say` or
    /// `espeak`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech: Option<CommandSpeech>,
    /// Where `export` writes; `~` and `$VAR` are expanded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_path: Option<String>,
}

/// Command-line flags that take precedence over the config file.
#[derive(Debug, Default, clap::Args)]
pub struct ConfigOverrides {
    /// Display language for gesture words, e.g. `de`
    #[arg(long, global = true, env = "SIGNLINE_LANGUAGE")]
    pub language: Option<String>,

    /// Minimum time between two accepted gestures
    #[arg(long, global = true, env = "SIGNLINE_DEBOUNCE_MS")]
    pub debounce_ms: Option<u64>,

    /// What a "no hand" reading does: `retain` or `clear`
    #[arg(long, global = true)]
    pub empty_reading: Option<EmptyReadingPolicy>,

    /// Majority-vote smoothing over the last three readings
    #[arg(long, global = true)]
    pub smoothing: bool,

    /// Speak each committed sentence
    #[arg(long, global = true)]
    pub speak: bool,

    /// Hide the live subtitle overlay
    #[arg(long, global = true)]
    pub no_overlay: bool,

    /// Export destination
    #[arg(long, global = true, env = "SIGNLINE_EXPORT")]
    pub export: Option<String>,
}

impl AppConfig {
    pub fn load(store: &SettingsStore) -> Result<Self, signline_storage::Error> {
        let config: Self = store.load()?;
        tracing::debug!(path = %store.path().display(), exists = store.exists(), "config_loaded");
        Ok(config)
    }

    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(language) = overrides.language.as_deref() {
            let language = language.trim();
            self.subtitle.words.language = (!language.is_empty()).then(|| language.to_string());
        }
        if let Some(ms) = overrides.debounce_ms {
            self.subtitle.debounce_window_ms = ms;
        }
        if let Some(policy) = overrides.empty_reading {
            self.subtitle.empty_reading = policy;
        }
        if overrides.smoothing && self.pose.smoothing.is_none() {
            self.pose.smoothing = Some(SmoothingConfig::default());
        }
        if overrides.speak {
            self.subtitle.speech_enabled = true;
        }
        if overrides.no_overlay {
            self.subtitle.overlay_enabled = false;
        }
        if let Some(export) = overrides.export.as_ref() {
            self.export_path = Some(export.clone());
        }
    }

    pub fn speech_backend(&self) -> CommandSpeech {
        self.speech.clone().unwrap_or_default()
    }

    pub fn export_path(&self) -> Result<PathBuf, signline_storage::Error> {
        match self.export_path.as_deref() {
            Some(path) if !path.trim().is_empty() => Ok(paths::expand_path(path.trim())),
            _ => paths::default_export_path(),
        }
    }

    /// Pose labels in rule order; the TUI binds them to number keys.
    pub fn vocabulary(&self) -> Vec<String> {
        let mut labels: Vec<String> = Vec::new();
        for rule in &self.pose.rules {
            if !labels.contains(&rule.label) {
                labels.push(rule.label.clone());
            }
        }
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = tempdir().unwrap();
        let store = SettingsStore::new(temp.path().join("config.json"));
        assert_eq!(AppConfig::load(&store).unwrap(), AppConfig::default());
    }

    #[test]
    fn nested_sections_fill_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"subtitle": {"debounce_window_ms": 500}, "speech": {"program": "espeak", "args": ["-v", "de"]}}"#,
        )
        .unwrap();

        let config = AppConfig::load(&SettingsStore::new(&path)).unwrap();
        assert_eq!(config.subtitle.debounce_window_ms, 500);
        assert!(config.subtitle.overlay_enabled);
        assert_eq!(config.pose, PoseConfig::default());
        assert_eq!(
            config.speech_backend(),
            CommandSpeech::new("espeak").with_args(["-v", "de"])
        );
    }

    #[test]
    fn overrides_win_over_file() {
        let mut config = AppConfig::default();
        config.apply(&ConfigOverrides {
            language: Some("de".into()),
            debounce_ms: Some(300),
            empty_reading: Some(EmptyReadingPolicy::Clear),
            smoothing: true,
            speak: true,
            no_overlay: true,
            export: Some("/tmp/out.txt".into()),
        });

        assert_eq!(config.subtitle.words.language.as_deref(), Some("de"));
        assert_eq!(config.subtitle.debounce_window_ms, 300);
        assert_eq!(config.subtitle.empty_reading, EmptyReadingPolicy::Clear);
        assert_eq!(config.pose.smoothing, Some(SmoothingConfig::default()));
        assert!(config.subtitle.speech_enabled);
        assert!(!config.subtitle.overlay_enabled);
        assert_eq!(config.export_path().unwrap(), PathBuf::from("/tmp/out.txt"));
    }

    #[test]
    fn empty_overrides_change_nothing() {
        let mut config = AppConfig::default();
        config.apply(&ConfigOverrides::default());
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn vocabulary_follows_rule_order() {
        assert_eq!(
            AppConfig::default().vocabulary(),
            vec!["hello", "thank_you", "we", "made", "this", "program"]
        );
    }
}
