//! Defines the `Config` struct for a single bundling run.
//!
//! A `Config` is built once, either from the CLI or programmatically through
//! [`ConfigBuilder`], and is never modified afterwards.

use crate::filtering::{ExclusionSet, ExtensionFilter};
use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
pub mod path_resolve;

pub use path_resolve::resolve_source_root;

/// Settings for a run, validated and normalised.
#[derive(Debug, Clone)]
pub struct Config {
    /// The source directory as given by the user. Resolved by the collector.
    pub src_dir: PathBuf,
    /// Where the bundle is written.
    pub output_file: PathBuf,
    /// Extensions eligible for collection.
    pub extensions: ExtensionFilter,
    /// Directory names pruned during the walk.
    pub exclusions: ExclusionSet,
    /// If `true`, list the collected files instead of writing the bundle.
    pub dry_run: bool,
}
