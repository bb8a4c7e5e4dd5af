// tests/bundle_errors.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, srcbundle_cmd};
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::tempdir;

#[test]
fn test_invalid_utf8_file_is_skipped_and_reported() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "a.js", "good();");
    fs::File::create(temp.path().join("b.js"))?.write_all(&[0x48, 0x65, 0x6c, 0x6c, 0x80, 0x6f])?;
    create_file(temp.path(), "c.js", "alsoGood();");

    srcbundle_cmd()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Bundled 2 files into bundle.js (1 skipped due to errors)",
        ))
        .stderr(predicate::str::contains("b.js"));

    let bundle = fs::read_to_string(temp.path().join("bundle.js"))?;
    assert_eq!(
        bundle,
        "// ==== File: a.js ====\ngood();\n\n\
         // ==== File: b.js ====\n\n\n\
         // ==== File: c.js ====\nalsoGood();\n\n"
    );

    temp.close()?;
    Ok(())
}
