// tests/common/mod.rs
//! Shared fixtures for the binary tests.

use std::{fs, path::Path};

use tempfile::TempDir;

/// Create a test file with the given contents.
///
/// # Panics
///
/// Panics with a descriptive message if file creation fails.
pub fn create_test_file(path: &Path, contents: &[u8]) {
    fs::write(path, contents).unwrap_or_else(|e| panic!("Failed to create test file at {path:?}: {e}"));
}

/// A fresh directory holding `names` as empty files.
pub fn workspace_with(names: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    for name in names {
        create_test_file(&dir.path().join(name), b"");
    }
    dir
}
