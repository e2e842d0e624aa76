use std::path::Path;

use tempfile::NamedTempFile;

// A bare file name has an empty parent; the temp file must still land next
// to the target so `persist` stays a same-directory rename.
fn parent_dir(target: &Path) -> std::io::Result<&Path> {
    match target.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Ok(Path::new(".")),
        Some(parent) => Ok(parent),
        None => Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "target has no parent",
        )),
    }
}

pub fn atomic_write(target: &Path, content: &str) -> std::io::Result<()> {
    let parent = parent_dir(target)?;
    std::fs::create_dir_all(parent)?;

    let temp = NamedTempFile::new_in(parent)?;
    std::fs::write(temp.path(), content)?;
    temp.persist(target)?;
    Ok(())
}

pub async fn atomic_write_async(target: &Path, content: &str) -> std::io::Result<()> {
    let parent = parent_dir(target)?;
    tokio::fs::create_dir_all(parent).await?;

    let temp = NamedTempFile::new_in(parent)?;
    tokio::fs::write(temp.path(), content).await?;
    temp.persist(target)?;
    Ok(())
}
