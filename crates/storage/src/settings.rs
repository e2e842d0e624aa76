use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, fs::atomic_write, paths};

/// A JSON settings file that is merged, never blindly overwritten.
///
/// Missing files read as `{}`; typed loads therefore yield each field's
/// `#[serde(default)]`.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the resolved platform location (see [`paths::resolve_config_dir`]).
    pub fn platform_default() -> Result<Self, Error> {
        let base = paths::resolve_config_dir()?;
        Ok(Self::new(paths::compute_config_path(&base)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn read_or_default(&self) -> Result<serde_json::Value, Error> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(serde_json::json!({})),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(serde_json::json!({})),
            Err(e) => Err(e.into()),
        }
    }

    pub fn load<T: DeserializeOwned>(&self) -> Result<T, Error> {
        Ok(serde_json::from_value(self.read_or_default()?)?)
    }

    /// Merges `settings` into whatever is on disk and writes the result.
    pub fn save(&self, settings: serde_json::Value) -> Result<(), Error> {
        if self.path.is_dir() {
            return Err(Error::PathIsDirectory);
        }

        let existing = self.read_or_default()?;
        let merged = merge_settings(existing, settings);
        let content = serde_json::to_string_pretty(&merged)?;

        atomic_write(&self.path, &content)?;
        Ok(())
    }

    pub fn save_typed<T: Serialize>(&self, settings: &T) -> Result<(), Error> {
        self.save(serde_json::to_value(settings)?)
    }

    pub fn reset(&self) -> Result<(), Error> {
        atomic_write(&self.path, "{}")?;
        Ok(())
    }
}

/// Objects merge key by key, recursively; anything else in `incoming`
/// replaces what was there.
pub fn merge_settings(existing: serde_json::Value, incoming: serde_json::Value) -> serde_json::Value {
    match (existing, incoming) {
        (serde_json::Value::Object(mut existing_map), serde_json::Value::Object(incoming_map)) => {
            for (key, value) in incoming_map {
                let merged = match existing_map.remove(&key) {
                    Some(previous) => merge_settings(previous, value),
                    None => value,
                };
                existing_map.insert(key, merged);
            }
            serde_json::Value::Object(existing_map)
        }
        (_, incoming) => incoming,
    }
}
