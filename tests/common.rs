// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn srcbundle_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("srcbundle"))
}

/// Creates a file (and its parent directories) under `root`.
#[allow(dead_code)]
pub fn create_file(root: &Path, relative_path: &str, content: &str) {
    let file_path = root.join(relative_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
}
