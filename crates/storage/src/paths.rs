use std::path::{Path, PathBuf};

pub const APP_FOLDER: &str = "signline";
pub const CONFIG_FILENAME: &str = "config.json";
pub const EXPORT_FILENAME: &str = "subtitles.txt";
pub const CONFIG_DIR_ENV_VAR: &str = "SIGNLINE_CONFIG_DIR";

/// Expands `~` and `$VAR` / `${VAR}` in user-supplied paths. Unknown
/// variables are left as written.
pub fn expand_path(path: &str) -> PathBuf {
    let home_dir = || dirs::home_dir().map(|p| p.to_string_lossy().into_owned());
    let context = |var: &str| -> Option<String> { std::env::var(var).ok() };
    let expanded = shellexpand::full_with_context_no_errors(path, home_dir, context);
    PathBuf::from(expanded.into_owned())
}

/// `$SIGNLINE_CONFIG_DIR` when set, else `<platform config dir>/signline`.
pub fn resolve_config_dir() -> Result<PathBuf, crate::Error> {
    if let Ok(custom) = std::env::var(CONFIG_DIR_ENV_VAR)
        && !custom.trim().is_empty()
    {
        return Ok(expand_path(custom.trim()));
    }

    dirs::config_dir()
        .map(|dir| dir.join(APP_FOLDER))
        .ok_or(crate::Error::ConfigDirUnavailable)
}

pub fn compute_config_path(base: &Path) -> PathBuf {
    base.join(CONFIG_FILENAME)
}

/// `subtitles.txt` in the user's documents folder, falling back to home.
pub fn default_export_path() -> Result<PathBuf, crate::Error> {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join(EXPORT_FILENAME))
        .ok_or(crate::Error::ExportDirUnavailable)
}
