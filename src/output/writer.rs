// src/output/writer.rs

//! Manages the bundle's output file.
//!
//! The file is created (or truncated) once per run and held open, behind a
//! `BufWriter`, for the whole bundling loop.

use crate::errors::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Creates or truncates the output file and wraps it in a `BufWriter`.
///
/// # Errors
/// Returns `Error::OutputOpen` if the file cannot be created, for example
/// because its directory does not exist or is not writable.
pub fn open_output_file(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|source| Error::OutputOpen {
        path: path.display().to_string(),
        source,
    })?;
    log::debug!("Opened output file: {}", path.display());
    Ok(BufWriter::new(file))
}

/// Flushes and closes the output stream.
///
/// Errors surfacing at flush time (e.g. disk full) become `Error::OutputWrite`.
pub fn finalize_output<W: Write>(mut writer: W) -> Result<()> {
    writer.flush()?;
    Ok(())
}
