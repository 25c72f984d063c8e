//! SPDX file discovery.
//!
//! Resolves a base directory plus glob pattern into an ordered file list.
//! The core conversion never touches the filesystem pattern itself; it only
//! receives the resolved paths.

use crate::error::{Result, SnapshotError};
use std::path::{Path, PathBuf};

/// Find SPDX files under `dir` matching the glob `pattern`.
///
/// Matches are returned in sorted order so runs are deterministic regardless
/// of filesystem iteration order. No matches is not an error; the caller
/// gets an empty list and produces an empty snapshot.
pub fn discover_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let full_pattern = dir.join(pattern);
    let full_pattern = full_pattern
        .to_str()
        .ok_or_else(|| SnapshotError::config("search path is not valid UTF-8"))?;

    let paths = glob::glob(full_pattern)
        .map_err(|e| SnapshotError::config(format!("invalid glob pattern: {e}")))?;

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("Skipping unreadable path during discovery: {e}");
            }
        }
    }

    files.sort();
    tracing::debug!(pattern = full_pattern, count = files.len(), "discovered SPDX files");
    Ok(files)
}
