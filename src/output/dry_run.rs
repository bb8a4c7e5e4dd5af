// src/output/dry_run.rs

use crate::core_types::CollectedFile;
use crate::errors::Result;
use log::debug;
use std::io::Write;

/// Writes the output for a dry run (-D): the files that would be bundled, in
/// bundle order.
pub fn write_dry_run_output(writer: &mut dyn Write, files: &[CollectedFile]) -> Result<()> {
    debug!("Executing dry run output...");
    writeln!(writer, "--- Dry Run: Files that would be bundled ---")?;
    for file in files {
        writeln!(writer, "- {}", file.display_path)?;
    }
    writeln!(writer, "--- End Dry Run ({} files) ---", files.len())?;
    writer.flush()?;
    Ok(())
}
