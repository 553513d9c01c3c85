//! Writing generated files to disk.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::Result;

/// Outcome of [`ensure_dir`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    Created,
    Existing,
}

/// Create `dir` and its parents unless it already exists.
///
/// Existing contents are left alone.
pub fn ensure_dir(dir: &Path) -> Result<DirStatus> {
    if dir.exists() {
        return Ok(DirStatus::Existing);
    }
    fs::create_dir_all(dir)?;
    Ok(DirStatus::Created)
}

/// Write `content` to `path`, replacing any existing file.
///
/// Uses atomic write pattern: writes to a hidden temp file in the same
/// directory, syncs it to disk, then renames it over the destination.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote file");
    Ok(())
}
