use crate::filtering::ExclusionSet;
use ignore::WalkBuilder;
use log::debug;
use std::path::Path;

/// Configures and builds the `ignore::Walk` used by the collector.
///
/// Standard filters (hidden files, `.gitignore`, `.ignore`) are disabled: the
/// only pruning is the exclusion set, applied in `filter_entry` so excluded
/// directories are rejected before the walker reads them. Symlinks are not
/// followed, which keeps every yielded path under `root`.
pub(super) fn build_walker(root: &Path, exclusions: &ExclusionSet) -> ignore::Walk {
    let mut walker_builder = WalkBuilder::new(root);
    walker_builder.standard_filters(false);
    walker_builder.follow_links(false);
    debug!("Configuring WalkBuilder: standard_filters disabled, links not followed.");

    let exclusions = exclusions.clone();
    walker_builder.filter_entry(move |entry| {
        // The root is scanned even if its own name is excluded.
        if entry.depth() == 0 {
            return true;
        }
        let is_dir = entry.file_type().map_or(false, |ft| ft.is_dir());
        if is_dir && exclusions.is_excluded(entry.file_name()) {
            debug!("Pruning excluded directory: {}", entry.path().display());
            return false;
        }
        true
    });

    walker_builder.build()
}
