// src/filtering/exclusion.rs

use crate::constants::DEFAULT_EXCLUDED_DIRS;
use std::collections::BTreeSet;
use std::ffi::OsStr;

/// Directory names the collector never descends into.
///
/// Names are compared exactly against a directory's own name, at any depth.
///
/// # Examples
///
/// ```
/// use srcbundle::filtering::ExclusionSet;
/// use std::ffi::OsStr;
///
/// let set = ExclusionSet::default().with_extra(["vendor"]);
/// assert!(set.is_excluded(OsStr::new("node_modules")));
/// assert!(set.is_excluded(OsStr::new("vendor")));
/// assert!(!set.is_excluded(OsStr::new("src")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    names: BTreeSet<String>,
}

impl ExclusionSet {
    /// An exclusion set containing no names.
    pub fn empty() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    /// Returns a copy of this set with `extra` names added. Blank names are ignored.
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.names.extend(
            extra
                .into_iter()
                .map(|s| s.as_ref().trim().to_string())
                .filter(|s| !s.is_empty()),
        );
        self
    }

    /// Checks whether a directory with this name must be pruned.
    pub fn is_excluded(&self, dir_name: &OsStr) -> bool {
        dir_name
            .to_str()
            .map_or(false, |name| self.names.contains(name))
    }

    /// The excluded names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for ExclusionSet {
    /// The built-in list of dependency and build-artifact directories.
    fn default() -> Self {
        Self::empty().with_extra(DEFAULT_EXCLUDED_DIRS)
    }
}
