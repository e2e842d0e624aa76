use std::path::Path;

use crate::{Error, fs};

/// Writes the exported transcript, replacing any previous export in one step.
pub fn export_transcript(target: &Path, text: &str) -> Result<(), Error> {
    check_target(target)?;
    fs::atomic_write(target, text)?;
    Ok(())
}

pub async fn export_transcript_async(target: &Path, text: &str) -> Result<(), Error> {
    check_target(target)?;
    fs::atomic_write_async(target, text).await?;
    Ok(())
}

fn check_target(target: &Path) -> Result<(), Error> {
    if target.parent().is_none() {
        return Err(Error::PathHasNoParent);
    }
    if target.is_dir() {
        return Err(Error::PathIsDirectory);
    }
    Ok(())
}
