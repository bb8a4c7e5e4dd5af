// src/output/content_reader.rs

use crate::core_types::CollectedFile;
use crate::errors::{io_error_with_path, Result};
use std::fs;

/// Reads the entire content of a collected file as UTF-8.
///
/// The file handle is scoped to this call and released on every path.
/// Errors carry the file's display path.
pub(super) fn read_file_content(file: &CollectedFile) -> Result<String> {
    fs::read_to_string(&file.absolute_path).map_err(|e| io_error_with_path(e, &file.display_path))
}
