//! The collector: walks the source tree and selects the files to bundle.
use crate::config::resolve_source_root;
use crate::core_types::CollectedFile;
use crate::errors::Result;
use crate::filtering::{ExclusionSet, ExtensionFilter};
use log::debug;
use std::path::Path;
use tracing::instrument;

mod entry_processor;
mod walker;

use entry_processor::process_direntry;
use walker::build_walker;

/// Collects every file under `root` whose name matches `extensions`, without
/// descending into directories named in `exclusions`.
///
/// The result is sorted ascending by the forward-slash relative path, so two
/// calls on an unchanged tree return identical lists. An empty list is not an
/// error.
///
/// # Errors
/// Returns `Error::Filesystem` or `Error::NotADirectory` if `root` cannot be
/// used as a source directory. Problems with entries below the root are logged
/// and skipped.
///
/// # Examples
///
/// ```
/// use srcbundle::discovery::collect_files;
/// use srcbundle::filtering::{ExclusionSet, ExtensionFilter};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::create_dir_all(dir.path().join("src/utils")).unwrap();
/// fs::create_dir_all(dir.path().join("node_modules/lib")).unwrap();
/// fs::write(dir.path().join("src/App.tsx"), "").unwrap();
/// fs::write(dir.path().join("src/utils/helper.ts"), "").unwrap();
/// fs::write(dir.path().join("node_modules/lib/index.js"), "").unwrap();
///
/// let exts = ExtensionFilter::new(["tsx", "ts"]).unwrap();
/// let files = collect_files(dir.path(), &exts, &ExclusionSet::default()).unwrap();
/// let paths: Vec<_> = files.iter().map(|f| f.display_path.as_str()).collect();
/// assert_eq!(paths, vec!["src/App.tsx", "src/utils/helper.ts"]);
/// ```
#[instrument(level = "debug", skip_all, fields(root = %root.display()))]
pub fn collect_files(
    root: &Path,
    extensions: &ExtensionFilter,
    exclusions: &ExclusionSet,
) -> Result<Vec<CollectedFile>> {
    let resolved = resolve_source_root(root)?;
    debug!("Scanning source root: {}", resolved.display());

    let mut files: Vec<CollectedFile> = build_walker(&resolved, exclusions)
        .filter_map(|entry| process_direntry(entry, &resolved, extensions))
        .collect();

    files.sort_by(|a, b| a.display_path.cmp(&b.display_path));

    debug!("Collection complete. Files: {}", files.len());
    Ok(files)
}
