// src/config/path_resolve.rs

use crate::errors::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves the source directory to an absolute, canonicalized `PathBuf`.
///
/// The directory is also opened for listing, so an unreadable root fails here
/// rather than producing a silently empty walk.
///
/// # Errors
/// Returns `Error::Filesystem` if the path does not exist or cannot be read,
/// and `Error::NotADirectory` if it names something other than a directory.
pub fn resolve_source_root(src: &Path) -> Result<PathBuf> {
    let display = src.display().to_string();
    let resolved = src.canonicalize().map_err(|source| Error::Filesystem {
        path: display.clone(),
        source,
    })?;
    if !resolved.is_dir() {
        return Err(Error::NotADirectory { path: display });
    }
    fs::read_dir(&resolved).map_err(|source| Error::Filesystem {
        path: display,
        source,
    })?;
    Ok(resolved)
}
