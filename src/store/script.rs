//! The script record

use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A Lua script on disk
///
/// This is a view computed from the directory listing; nothing about it is
/// persisted beyond the file itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Script {
    /// File name without the extension
    pub name: String,

    /// Full location of the file
    pub path: PathBuf,
}

impl Script {
    /// Create a new script record
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Script {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Build a record from a file path, naming it after the file stem
    pub fn from_path(path: &Path) -> Option<Self> {
        let stem = path.file_stem()?;
        Some(Script::new(stem.to_string_lossy(), path))
    }

    /// Read the full contents of the script
    pub fn load(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }
}
