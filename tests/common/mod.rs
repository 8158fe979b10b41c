//! Common test utilities

#![allow(dead_code)]

use ronix::ScriptStore;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Create an empty store in a fresh temporary directory
pub fn create_test_store() -> (TempDir, ScriptStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = ScriptStore::open(temp_dir.path()).unwrap();
    (temp_dir, store)
}

/// Create a store pre-populated with the given script names
pub fn create_store_with(names: &[&str]) -> (TempDir, ScriptStore) {
    let (temp_dir, store) = create_test_store();
    for name in names {
        store.add_script(name, &format!("print(\"{}\")\n", name)).unwrap();
    }
    (temp_dir, store)
}

/// Snapshot of every file name and its content, sorted by name
pub fn snapshot_dir(dir: &Path) -> Vec<(String, String)> {
    let mut files: Vec<(String, String)> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            (name, fs::read_to_string(&path).unwrap())
        })
        .collect();
    files.sort();
    files
}
