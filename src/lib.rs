//! `srcbundle` is a library and command-line tool that concatenates a
//! project's source files into a single bundle, skipping dependency and
//! build-artifact directories such as `node_modules` and `dist`.
//!
//! The pipeline has two stages:
//! 1.  **Collect**: walk the source tree, prune excluded directories, and keep
//!     files whose name ends in one of the requested extensions. The result is
//!     sorted by relative path.
//! 2.  **Bundle**: write each file, preceded by a
//!     `// ==== File: <relative/path> ====` line and followed by two newlines,
//!     into one output stream. Unreadable files are reported and skipped.
//!
//! # Example: Library Usage
//!
//! ```
//! use srcbundle::{bundle, collect, ConfigBuilder};
//! use srcbundle::progress::NoOpProgress;
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().unwrap();
//! fs::create_dir_all(temp_dir.path().join("node_modules/react")).unwrap();
//! fs::write(temp_dir.path().join("node_modules/react/index.js"), "skipped").unwrap();
//! fs::write(temp_dir.path().join("index.js"), "render(<App />);").unwrap();
//!
//! let config = ConfigBuilder::new()
//!     .src_dir(temp_dir.path().to_str().unwrap())
//!     .build()
//!     .unwrap();
//!
//! let files = collect(&config).unwrap();
//! let mut output = Vec::new();
//! let report = bundle(&files, &mut output, &NoOpProgress).unwrap();
//!
//! assert_eq!(report.bundled, 1);
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "// ==== File: index.js ====\nrender(<App />);\n\n"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod output;
pub mod progress;

pub use config::{Config, ConfigBuilder};
pub use core_types::{BundleReport, CollectedFile, SkippedFile};
pub use errors::{Error, Result};

use crate::progress::ProgressReporter;
use log::debug;
use std::io::Write;

/// Collects the files to bundle for `config`.
///
/// This is the first stage of the pipeline. If the configured output file
/// already exists inside the source tree it is left out, so a previous bundle
/// is never bundled into the next one.
///
/// # Errors
/// Returns `Error::Filesystem` or `Error::NotADirectory` for an unusable
/// source directory.
pub fn collect(config: &Config) -> Result<Vec<CollectedFile>> {
    let mut files =
        discovery::collect_files(&config.src_dir, &config.extensions, &config.exclusions)?;

    if let Ok(output_path) = config.output_file.canonicalize() {
        let before = files.len();
        files.retain(|f| f.absolute_path != output_path);
        if files.len() != before {
            debug!(
                "Left the output file '{}' out of the bundle.",
                output_path.display()
            );
        }
    }
    Ok(files)
}

/// Writes the collected files into `writer`.
///
/// This is the second stage of the pipeline. See [`output::bundle_files`].
pub fn bundle(
    files: &[CollectedFile],
    writer: &mut dyn Write,
    progress: &dyn ProgressReporter,
) -> Result<BundleReport> {
    output::bundle_files(files, writer, progress)
}

/// Lists the files that would be bundled to `writer` and returns their count.
///
/// The output file is not opened.
pub fn dry_run(config: &Config, writer: &mut dyn Write) -> Result<usize> {
    let files = collect(config)?;
    if files.is_empty() {
        return Err(Error::NoFilesFound);
    }
    output::dry_run::write_dry_run_output(writer, &files)?;
    Ok(files.len())
}

/// Executes the complete pipeline: collect, open the output file, bundle.
///
/// # Returns
/// The `BundleReport` on success. Returns `Err(Error::NoFilesFound)` without
/// touching the output file if nothing matched.
///
/// # Errors
/// Source-root errors abort before any output is produced. Output open and
/// write errors abort the run and may leave a partial output file behind.
pub fn run(config: &Config, progress: &dyn ProgressReporter) -> Result<BundleReport> {
    let files = collect(config)?;
    if files.is_empty() {
        return Err(Error::NoFilesFound);
    }

    let mut writer = output::writer::open_output_file(&config.output_file)?;
    let report = bundle(&files, &mut writer, progress)?;
    output::writer::finalize_output(writer)?;
    Ok(report)
}
