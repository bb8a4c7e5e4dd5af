// src/filtering/file_type.rs

use std::fs::FileType;
use std::path::Path;

/// Checks if a walk entry should be treated as a regular file.
///
/// Symlinks are not followed by the walker, so a link is only accepted when
/// its target is a regular file. Links to directories are never traversed.
#[inline]
pub(crate) fn is_file_type(file_type: &FileType, path: &Path) -> bool {
    if file_type.is_symlink() {
        return path.is_file();
    }
    file_type.is_file()
}
