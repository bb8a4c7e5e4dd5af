// src/output/formatter.rs

//! Provides helper functions for formatting parts of the output.

use crate::constants::{DELIMITER_PREFIX, DELIMITER_SUFFIX};
use std::path::{Component, Path};

/// Formats a relative path for display in delimiter lines and listings.
///
/// Components are joined with `/` regardless of platform, so bundles built on
/// Windows and Unix are byte-identical.
///
/// # Examples
/// ```
/// use srcbundle::output::formatter::format_path_for_display;
/// use std::path::Path;
///
/// assert_eq!(format_path_for_display(Path::new("src/utils/helper.ts")), "src/utils/helper.ts");
/// ```
pub fn format_path_for_display(path: &Path) -> String {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Builds the delimiter line for a file, without the trailing newline.
///
/// # Examples
/// ```
/// use srcbundle::output::formatter::delimiter_line;
///
/// assert_eq!(delimiter_line("src/App.tsx"), "// ==== File: src/App.tsx ====");
/// ```
pub fn delimiter_line(display_path: &str) -> String {
    format!("{}{}{}", DELIMITER_PREFIX, display_path, DELIMITER_SUFFIX)
}
