//! Fixture and snapshot helpers shared by integration tests
//!
//! Inputs live in `tests/fixtures`, expected outputs in `tests/snapshots`.
//! Set `SEQWALK_UPDATE_SNAPSHOTS=1` to rewrite snapshots from actual output.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

fn test_file(dir: &str, name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join(dir)
        .join(name)
}

pub fn read_fixture(name: &str) -> String {
    let path = test_file("fixtures", name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("fixture {:?} not found", path))
}

pub fn assert_snapshot(name: &str, actual: &str) {
    let path = test_file("snapshots", name);
    if std::env::var_os("SEQWALK_UPDATE_SNAPSHOTS").is_some() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create snapshot directory");
        }
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected =
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("snapshot {:?} not found", path));
    let expected: Vec<_> = expected.lines().collect();
    let actual: Vec<_> = actual.lines().collect();

    if let Some(idx) = (0..expected.len().max(actual.len()))
        .find(|&idx| expected.get(idx) != actual.get(idx))
    {
        panic!(
            "snapshot {:?} differs at line {}\n  expected: {:?}\n  actual:   {:?}",
            path,
            idx + 1,
            expected.get(idx),
            actual.get(idx)
        );
    }
}
