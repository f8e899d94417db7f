//! Shared helpers for unit tests that touch the filesystem.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

pub fn create_test_input_dir() -> TempDir {
    TempDir::new().unwrap()
}

/// Writes `content` to `relative` under `dir`, creating subdirectories.
pub fn create_test_file(dir: &TempDir, relative: &str, content: &str) -> PathBuf {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}
