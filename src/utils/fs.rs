//! File system utilities.

use crate::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Check if a path exists and is a directory.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(crate::Error::PathNotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return Err(crate::Error::NotADirectory(path.display().to_string()));
    }
    Ok(())
}

/// Direct subdirectories of `path`, sorted by name. Hidden ones are skipped.
pub fn list_subdirectories(path: &Path) -> Result<Vec<PathBuf>> {
    ensure_directory(path)?;

    let mut dirs = Vec::new();
    for entry in WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| crate::Error::other(e.to_string()))?;
        if !entry.file_type().is_dir() || is_hidden(entry.path()) {
            continue;
        }
        dirs.push(entry.into_path());
    }

    Ok(dirs)
}

/// Check whether a directory holds a file whose name ends with `suffix`
/// (case insensitive).
pub fn has_file_with_suffix(dir: &Path, suffix: &str) -> Result<bool> {
    let suffix = suffix.to_lowercase();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if entry
            .file_name()
            .to_string_lossy()
            .to_lowercase()
            .ends_with(&suffix)
        {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Sanitize a string for use in a directory name.
pub fn sanitize_filename(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}
