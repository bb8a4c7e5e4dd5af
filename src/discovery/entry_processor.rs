// src/discovery/entry_processor.rs

use crate::core_types::CollectedFile;
use crate::filtering::{is_file_type, ExtensionFilter};
use crate::output::formatter::format_path_for_display;
use ignore::DirEntry;
use log::{debug, trace, warn};
use std::path::Path;

/// Processes a single entry yielded by the walker.
///
/// Returns `Some(CollectedFile)` if the entry is a file under `root` whose
/// name matches `extensions`, and `None` otherwise. Walker errors below the
/// root (unreadable subdirectory, entry removed mid-walk) are logged and
/// skipped.
pub(crate) fn process_direntry(
    entry_result: Result<DirEntry, ignore::Error>,
    root: &Path,
    extensions: &ExtensionFilter,
) -> Option<CollectedFile> {
    // --- 1. Handle Walker Errors ---
    let entry = match entry_result {
        Ok(entry) => entry,
        Err(ignore_error) => {
            warn!("Walker error: {}", ignore_error);
            return None;
        }
    };

    let absolute_path = entry.path();
    trace!("Processing entry: {}", absolute_path.display());

    // --- 2. Filter by File Type ---
    let Some(file_type) = entry.file_type() else {
        trace!("Skipping entry without file type: {}", absolute_path.display());
        return None;
    };
    if !is_file_type(&file_type, absolute_path) {
        trace!("Skipping non-file entry: {}", absolute_path.display());
        return None;
    }

    // --- 3. Filter by Extension ---
    if !extensions.matches(absolute_path) {
        trace!("Skipping file due to extension filter: {}", absolute_path.display());
        return None;
    }

    // --- 4. Calculate Relative Path ---
    let relative_path = match absolute_path.strip_prefix(root) {
        Ok(p) => p.to_path_buf(),
        Err(err) => {
            warn!(
                "Skipping '{}': not under source root '{}': {}",
                absolute_path.display(),
                root.display(),
                err
            );
            return None;
        }
    };

    let display_path = format_path_for_display(&relative_path);
    debug!("Collected: {}", display_path);
    Some(CollectedFile {
        absolute_path: absolute_path.to_path_buf(),
        relative_path,
        display_path,
    })
}
