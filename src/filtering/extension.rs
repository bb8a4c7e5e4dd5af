// src/filtering/extension.rs

use crate::errors::{Error, Result};
use std::collections::BTreeSet;
use std::path::Path;

/// The set of file-name suffixes eligible for collection.
///
/// Extensions are stored lowercased and without a leading dot. A file matches
/// when its name, lowercased, ends with `.` followed by one of them, so
/// multi-part extensions such as `d.ts` work as expected.
///
/// # Examples
///
/// ```
/// use srcbundle::filtering::ExtensionFilter;
/// use std::path::Path;
///
/// let filter = ExtensionFilter::new(["TS", ".tsx"]).unwrap();
/// assert!(filter.matches(Path::new("src/App.tsx")));
/// assert!(filter.matches(Path::new("src/helper.TS")));
/// assert!(!filter.matches(Path::new("src/index.js")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    suffixes: BTreeSet<String>,
}

impl ExtensionFilter {
    /// Builds a filter from user-supplied extensions.
    ///
    /// Each value is trimmed, stripped of leading dots and lowercased.
    ///
    /// # Errors
    /// Returns `Error::Config` if the list is empty or a value is empty after
    /// normalisation.
    pub fn new<I, S>(extensions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut suffixes = BTreeSet::new();
        for raw in extensions {
            let raw = raw.as_ref();
            let normalized = normalize_extension(raw);
            if normalized.is_empty() {
                return Err(Error::Config(format!("Invalid extension: '{}'", raw)));
            }
            suffixes.insert(normalized);
        }
        if suffixes.is_empty() {
            return Err(Error::Config(
                "At least one extension must be given".to_string(),
            ));
        }
        Ok(Self { suffixes })
    }

    /// Checks whether the file name of `path` ends with one of the extensions.
    pub fn matches(&self, path: &Path) -> bool {
        match path.file_name() {
            Some(name) => self.matches_name(&name.to_string_lossy()),
            None => false,
        }
    }

    /// Checks a bare file name, case-insensitively.
    pub fn matches_name(&self, file_name: &str) -> bool {
        let lowered = file_name.to_lowercase();
        self.suffixes.iter().any(|ext| {
            lowered.len() > ext.len()
                && lowered.ends_with(ext.as_str())
                && lowered.as_bytes()[lowered.len() - ext.len() - 1] == b'.'
        })
    }

    /// The normalised extensions, in sorted order.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.suffixes.iter().map(String::as_str)
    }
}

fn normalize_extension(raw: &str) -> String {
    raw.trim().trim_start_matches('.').to_lowercase()
}
