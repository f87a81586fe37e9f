use std::path::PathBuf;

use harmony_cuts::core::ProjectStore;
use tempfile::TempDir;

/// Creates a ProjectStore rooted inside a fresh temp directory.
/// Returns both the store and the temp directory (which must be kept alive).
pub fn create_test_store() -> (ProjectStore, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let root = dir.path().join("Projects");
    let store = ProjectStore::open(&root).expect("Failed to open test store");
    (store, dir)
}

/// Path for a theme file inside a fresh temp directory. The file itself is
/// not created.
pub fn theme_file_path(dir: &TempDir) -> PathBuf {
    dir.path().join("settings").join("theme.txt")
}
