// src/cli.rs

use clap::Parser;

/// Bundles a project's source files into a single file.
///
/// srcbundle walks a directory, skips dependency and build-artifact directories
/// (node_modules, .git, build, dist, ...), and concatenates every file with a
/// matching extension into one output, each preceded by a
/// `// ==== File: <path> ====` delimiter line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source directory to scan.
    #[arg(short = 's', long = "src", value_name = "DIR", default_value = ".")]
    pub src: String,

    /// Output file path. Truncated if it exists.
    #[arg(short = 'o', long = "out", value_name = "FILE", default_value = "bundle.js")]
    pub out: String,

    /// Extensions to include, without dots (case-insensitive) [default: js jsx ts tsx].
    #[arg(short = 'e', long = "ext", value_name = "EXT", num_args = 1..)]
    pub extensions: Option<Vec<String>>,

    // --- Exclusion Options ---
    /// Additional directory names to skip, on top of the built-in list.
    #[arg(short = 'x', long = "exclude-dir", value_name = "NAME", num_args = 1..)]
    pub exclude_dirs: Option<Vec<String>>,

    /// Do not skip the built-in directories (node_modules, .git, build, dist, public, coverage, __pycache__).
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_default_excludes: bool,

    // --- Execution Control ---
    /// Print the files that would be bundled, without writing the output file.
    #[arg(short = 'D', long, action = clap::ArgAction::SetTrue)]
    pub dry_run: bool,
}
