use signline_storage::SettingsStore;

use crate::config::AppConfig;

#[derive(Debug, clap::Subcommand)]
pub enum Action {
    /// Print the config file location
    Path,
    /// Print the effective config (file merged over defaults, plus flags)
    Show,
    /// Write every setting to the config file, keeping existing values
    Init,
    /// Empty the config file so every setting falls back to its default
    Reset,
}

pub fn run(action: Action, store: &SettingsStore, config: &AppConfig) -> anyhow::Result<()> {
    match action {
        Action::Path => println!("{}", store.path().display()),
        Action::Show => println!("{}", serde_json::to_string_pretty(config)?),
        Action::Init => {
            let current = AppConfig::load(store)?;
            store.save_typed(&current)?;
            tracing::info!(path = %store.path().display(), "config_initialized");
            eprintln!("wrote {}", store.path().display());
        }
        Action::Reset => {
            store.reset()?;
            tracing::info!(path = %store.path().display(), "config_reset");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn init_keeps_user_values() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, r#"{"subtitle": {"debounce_window_ms": 450}}"#).unwrap();
        let store = SettingsStore::new(&path);

        run(Action::Init, &store, &AppConfig::default()).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["subtitle"]["debounce_window_ms"], 450);
        assert_eq!(written["subtitle"]["overlay_enabled"], true);
        assert!(written["pose"]["rules"].is_array());
    }

    #[test]
    fn reset_empties_the_file() {
        let temp = tempdir().unwrap();
        let store = SettingsStore::new(temp.path().join("config.json"));
        run(Action::Init, &store, &AppConfig::default()).unwrap();

        run(Action::Reset, &store, &AppConfig::default()).unwrap();

        assert_eq!(AppConfig::load(&store).unwrap(), AppConfig::default());
    }
}
