// src/constants.rs

/// Directory names that are never descended into unless defaults are disabled.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "build",
    "dist",
    "public",
    "coverage",
    "__pycache__",
];

/// Extensions collected when `--ext` is not given.
pub const DEFAULT_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];

/// Source directory used when `--src` is not given.
pub const DEFAULT_SRC_DIR: &str = ".";

/// Output path used when `--out` is not given.
pub const DEFAULT_OUTPUT_FILE: &str = "bundle.js";

/// Opening part of the per-file delimiter line.
pub const DELIMITER_PREFIX: &str = "// ==== File: ";

/// Closing part of the per-file delimiter line.
pub const DELIMITER_SUFFIX: &str = " ====";

/// Written after every file block, whether or not its content could be read.
pub const BLOCK_TERMINATOR: &str = "\n\n";

// Process exit codes. 2 is left to clap for usage errors.
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_SOURCE_ERROR: i32 = 3;
pub const EXIT_OUTPUT_ERROR: i32 = 4;
