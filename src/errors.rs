//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the failures that
//! can occur while collecting and bundling files. Root-level and output-stream
//! failures abort a run; per-file read failures are recovered by the bundler.

use thiserror::Error;

/// Application-specific errors used throughout `srcbundle`.
#[derive(Error, Debug)]
pub enum Error {
    // --- Source Root Errors (fatal) ---
    /// The source root is missing or cannot be read.
    #[error("Cannot read source directory '{path}': {source}")]
    Filesystem {
        /// The root path as given by the user.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The source root exists but is not a directory.
    #[error("Source path '{path}' is not a directory")]
    NotADirectory {
        /// The root path as given by the user.
        path: String,
    },

    // --- Per-File Errors (recovered) ---
    /// A single input file could not be read or decoded as UTF-8.
    #[error("Failed to read '{path}': {source}")]
    FileRead {
        /// The root-relative display path of the file.
        path: String,
        #[source]
        source: std::io::Error,
    },

    // --- Output Errors (fatal) ---
    /// The output file could not be created or truncated.
    #[error("Cannot open output file '{path}': {source}")]
    OutputOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the output stream failed (e.g. disk full).
    #[error("Failed to write bundle output: {0}")]
    OutputWrite(#[source] std::io::Error),

    // --- Configuration Errors ---
    /// Invalid configuration value, such as an empty extension.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// No files matched the requested extensions.
    #[error("No files found to bundle.")]
    NoFilesFound,
}

/// Convenience alias used by the library API.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<std::io::Error> for Error {
    /// Bare I/O errors only arise from the output stream; everything that
    /// touches input paths goes through the path-carrying constructors.
    fn from(source: std::io::Error) -> Self {
        Error::OutputWrite(source)
    }
}

/// Helper function to create an `Error::FileRead` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::FileRead {
        path: path.as_ref().display().to_string(),
        source,
    }
}
