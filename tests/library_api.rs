// tests/library_api.rs

mod common;

use common::create_file;
use srcbundle::errors::Error;
use srcbundle::progress::NoOpProgress;
use srcbundle::{bundle, collect, ConfigBuilder};
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

// --- Test Harness for reducing boilerplate ---

struct TestHarness {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestHarness {
    fn new() -> Self {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    fn file(&self, path: &str, content: &str) {
        create_file(&self.root, path, content);
    }

    fn builder(&self) -> ConfigBuilder {
        ConfigBuilder::new()
            .src_dir(self.root.to_str().unwrap())
            .output_file(self.root.join("out.bundle").to_str().unwrap())
    }
}

#[test]
fn test_collect_excludes_and_filters() -> anyhow::Result<()> {
    let harness = TestHarness::new();
    harness.file("src/App.tsx", "App");
    harness.file("node_modules/lib/index.js", "lib");
    harness.file("src/utils/helper.ts", "helper");

    let config = harness
        .builder()
        .extensions(vec!["tsx".to_string(), "ts".to_string()])
        .build()?;
    let files = collect(&config)?;

    let paths: Vec<&str> = files.iter().map(|f| f.display_path.as_str()).collect();
    assert_eq!(paths, vec!["src/App.tsx", "src/utils/helper.ts"]);
    Ok(())
}

#[test]
fn test_collected_extensions_are_requested_ones() -> anyhow::Result<()> {
    let harness = TestHarness::new();
    for name in ["a.JS", "b.jsx", "c.mjs", "d.js.map", "e.ts", "f"] {
        harness.file(name, name);
    }

    let config = harness
        .builder()
        .extensions(vec!["js".to_string(), "TS".to_string()])
        .build()?;
    let files = collect(&config)?;

    let paths: Vec<&str> = files.iter().map(|f| f.display_path.as_str()).collect();
    assert_eq!(paths, vec!["a.JS", "e.ts"]);
    for f in &files {
        let lower = f.display_path.to_lowercase();
        assert!(lower.ends_with(".js") || lower.ends_with(".ts"));
    }
    Ok(())
}

#[test]
fn test_file_removed_between_collect_and_bundle() -> anyhow::Result<()> {
    let harness = TestHarness::new();
    harness.file("a.js", "a");
    harness.file("b.js", "b");
    harness.file("c.js", "c");

    let config = harness.builder().build()?;
    let files = collect(&config)?;
    assert_eq!(files.len(), 3);

    fs::remove_file(harness.root.join("b.js"))?;

    let mut output = Vec::new();
    let report = bundle(&files, &mut output, &NoOpProgress)?;

    assert_eq!(report.bundled, 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].display_path, "b.js");
    match &report.skipped[0].error {
        Error::FileRead { path, source } => {
            assert_eq!(path, "b.js");
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("Expected Error::FileRead, got {:?}", other),
    }
    let text = String::from_utf8(output)?;
    assert!(text.contains("// ==== File: a.js ====\na\n\n"));
    assert!(text.contains("// ==== File: c.js ====\nc\n\n"));
    Ok(())
}

#[test]
fn test_bundle_is_idempotent() -> anyhow::Result<()> {
    let harness = TestHarness::new();
    harness.file("z.ts", "z");
    harness.file("m/n.ts", "n\n");
    harness.file("a.tsx", "");

    let config = harness.builder().build()?;
    let mut first = Vec::new();
    bundle(&collect(&config)?, &mut first, &NoOpProgress)?;
    let mut second = Vec::new();
    bundle(&collect(&config)?, &mut second, &NoOpProgress)?;

    assert_eq!(first, second);
    assert_eq!(
        String::from_utf8(first)?,
        "// ==== File: a.tsx ====\n\n\n// ==== File: m/n.ts ====\nn\n\n\n// ==== File: z.ts ====\nz\n\n"
    );
    Ok(())
}

#[test]
fn test_empty_tree_collects_nothing() -> anyhow::Result<()> {
    let harness = TestHarness::new();
    let config = harness.builder().build()?;
    let files = collect(&config)?;
    assert!(files.is_empty());

    let mut output = Vec::new();
    let report = bundle(&files, &mut output, &NoOpProgress)?;
    assert_eq!(report.bundled, 0);
    assert!(output.is_empty());
    Ok(())
}

#[test]
fn test_collect_missing_root() -> anyhow::Result<()> {
    let harness = TestHarness::new();
    let config = ConfigBuilder::new()
        .src_dir(harness.root.join("nope").to_str().unwrap())
        .build()?;
    assert!(matches!(collect(&config), Err(Error::Filesystem { .. })));
    Ok(())
}
