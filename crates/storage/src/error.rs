#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("config directory not available")]
    ConfigDirUnavailable,
    #[error("documents directory not available")]
    ExportDirUnavailable,
    #[error("path has no parent directory")]
    PathHasNoParent,
    #[error("path is a directory")]
    PathIsDirectory,
}
