//! Defines core data structures used throughout the pipeline.
//!
//! `CollectedFile` is produced by the collector, `BundleReport` by the bundler.

use crate::errors::Error;
use std::path::PathBuf;

/// A file selected by the collector. The content is read later, by the bundler.
///
/// # Examples
///
/// ```
/// use srcbundle::core_types::CollectedFile;
/// use std::path::PathBuf;
///
/// let file = CollectedFile {
///     absolute_path: PathBuf::from("/project/src/App.tsx"),
///     relative_path: PathBuf::from("src/App.tsx"),
///     display_path: "src/App.tsx".to_string(),
/// };
/// assert_eq!(file.display_path, "src/App.tsx");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedFile {
    /// The path used to open the file.
    pub absolute_path: PathBuf,
    /// The path relative to the scanned root, in native form.
    pub relative_path: PathBuf,
    /// The relative path with `/` separators. This is both the sort key and
    /// the text written into delimiter lines.
    pub display_path: String,
}

/// A file the bundler could not read. Its delimiter line is still written.
#[derive(Debug)]
pub struct SkippedFile {
    /// Root-relative display path of the file.
    pub display_path: String,
    /// Always an `Error::FileRead`.
    pub error: Error,
}

/// Outcome of a bundling pass.
#[derive(Debug, Default)]
pub struct BundleReport {
    /// Number of files whose content was written to the output.
    pub bundled: usize,
    /// Files that failed to read, in bundle order.
    pub skipped: Vec<SkippedFile>,
}

impl BundleReport {
    /// Total number of files the bundler visited.
    pub fn total(&self) -> usize {
        self.bundled + self.skipped.len()
    }
}
