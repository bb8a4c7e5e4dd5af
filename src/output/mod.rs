// src/output/mod.rs

//! The bundler: writes collected files, with delimiter lines, into one stream.

use crate::core_types::{BundleReport, CollectedFile, SkippedFile};
use crate::errors::Result;
use crate::progress::ProgressReporter;
use log::debug;
use std::io::Write;

mod content_reader;
pub mod dry_run;
pub mod file_block;
pub mod formatter;
pub mod writer;

/// Concatenates `files`, in order, into `writer`.
///
/// Each file is preceded by its delimiter line and followed by two newlines.
/// A file that cannot be read is logged, recorded in the report, and skipped;
/// the rest of the batch is still written. Any failure writing to `writer`
/// aborts the pass.
///
/// # Errors
/// Returns `Error::OutputWrite` if the output stream fails.
pub fn bundle_files(
    files: &[CollectedFile],
    writer: &mut dyn Write,
    progress: &dyn ProgressReporter,
) -> Result<BundleReport> {
    debug!("Bundling {} files...", files.len());
    let mut report = BundleReport::default();
    progress.set_length(files.len() as u64);

    for (index, file) in files.iter().enumerate() {
        progress.set_message(file.display_path.clone());
        match file_block::write_file_block(writer, file)? {
            None => report.bundled += 1,
            Some(error) => report.skipped.push(SkippedFile {
                display_path: file.display_path.clone(),
                error,
            }),
        }
        progress.set_position(index as u64 + 1);
    }

    writer.flush()?;
    progress.finish_with_message(format!("Bundled {} files", report.bundled));
    debug!(
        "Bundling complete. Bundled: {}, skipped: {}",
        report.bundled,
        report.skipped.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NoOpProgress;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    fn collected(root: &Path, rel: &str) -> CollectedFile {
        CollectedFile {
            absolute_path: root.join(rel),
            relative_path: PathBuf::from(rel),
            display_path: rel.to_string(),
        }
    }

    /// A writer that fails every write, standing in for a full disk.
    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_bundle_two_files() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("a.js"), "A")?;
        fs::write(temp.path().join("b.js"), "B\n")?;
        let files = vec![collected(temp.path(), "a.js"), collected(temp.path(), "b.js")];

        let mut out = Vec::new();
        let report = bundle_files(&files, &mut out, &NoOpProgress)?;

        assert_eq!(report.bundled, 2);
        assert!(report.skipped.is_empty());
        assert_eq!(
            String::from_utf8(out)?,
            "// ==== File: a.js ====\nA\n\n// ==== File: b.js ====\nB\n\n\n"
        );
        Ok(())
    }

    #[test]
    fn test_bundle_continues_after_read_error() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("a.js"), "A")?;
        fs::write(temp.path().join("c.js"), "C")?;
        let files = vec![
            collected(temp.path(), "a.js"),
            collected(temp.path(), "b.js"), // never created
            collected(temp.path(), "c.js"),
        ];

        let mut out = Vec::new();
        let report = bundle_files(&files, &mut out, &NoOpProgress)?;

        assert_eq!(report.bundled, 2);
        assert_eq!(report.total(), 3);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].display_path, "b.js");
        assert!(report.skipped[0].error.to_string().contains("b.js"));
        let text = String::from_utf8(out)?;
        assert!(text.ends_with("// ==== File: c.js ====\nC\n\n"));
        Ok(())
    }

    #[test]
    fn test_bundle_empty_list_writes_nothing() -> anyhow::Result<()> {
        let mut out = Vec::new();
        let report = bundle_files(&[], &mut out, &NoOpProgress)?;
        assert_eq!(report.bundled, 0);
        assert!(out.is_empty());
        Ok(())
    }

    #[test]
    fn test_write_failure_is_fatal() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("a.js"), "A")?;
        let files = vec![collected(temp.path(), "a.js")];

        let result = bundle_files(&files, &mut FailingWriter, &NoOpProgress);
        assert!(matches!(result, Err(crate::errors::Error::OutputWrite(_))));
        Ok(())
    }
}
