//! Script store manager
//!
//! The scripts directory is the only state: every operation reads or writes
//! it directly, and the directory listing is the only index.

use crate::error::{StoreError, StoreResult};
use crate::store::defaults::DEFAULT_SCRIPTS;
use crate::store::paths::{default_scripts_dir, sanitize_name, script_file_name, SCRIPT_EXTENSION};
use crate::store::Script;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Manages the Lua scripts kept in a single directory
#[derive(Debug, Clone)]
pub struct ScriptStore {
    /// Absolute path of the scripts directory
    scripts_dir: PathBuf,
}

impl ScriptStore {
    /// Open the store at `scripts_dir`, or at the default location if `None`
    ///
    /// The directory and any missing parents are created.
    pub fn new(scripts_dir: Option<PathBuf>) -> StoreResult<Self> {
        let dir = match scripts_dir {
            Some(dir) => dir,
            None => default_scripts_dir()?,
        };
        Self::open(dir)
    }

    /// Open the store at a specific directory, creating it if needed
    pub fn open(scripts_dir: impl AsRef<Path>) -> StoreResult<Self> {
        let scripts_dir = std::path::absolute(scripts_dir.as_ref())?;
        fs::create_dir_all(&scripts_dir)?;

        Ok(ScriptStore { scripts_dir })
    }

    /// The directory this store manages
    pub fn scripts_dir(&self) -> &Path {
        &self.scripts_dir
    }

    /// All scripts in the directory, ordered by file name
    pub fn list_scripts(&self) -> StoreResult<Vec<Script>> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.scripts_dir)? {
            let path = entry?.path();
            if path.extension() == Some(OsStr::new(SCRIPT_EXTENSION)) && path.is_file() {
                paths.push(path);
            }
        }
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        Ok(paths.iter().filter_map(|p| Script::from_path(p)).collect())
    }

    /// Create or overwrite a script, returning its record
    ///
    /// Spaces in `name` become underscores. Existing content is replaced,
    /// never appended to.
    pub fn add_script(&self, name: &str, content: &str) -> StoreResult<Script> {
        let sanitized = sanitize_name(name);
        let target = self.script_path(&sanitized);
        fs::write(&target, content)?;

        Ok(Script::new(sanitized, target))
    }

    /// Return the content of the script named exactly `name`
    pub fn run_script(&self, name: &str) -> StoreResult<String> {
        let scripts = self.list_scripts()?;

        match scripts.iter().find(|s| s.name == name) {
            Some(script) => Ok(script.load()?),
            None => Err(StoreError::not_found(
                name,
                scripts.iter().map(|s| s.name.as_str()),
            )),
        }
    }

    /// Create the built-in placeholder scripts that are missing
    ///
    /// Returns only the scripts this call created; existing files are left
    /// untouched.
    pub fn seed_missing_defaults(&self) -> StoreResult<Vec<Script>> {
        let mut created = Vec::new();
        for (name, content) in DEFAULT_SCRIPTS {
            if !self.script_path(name).exists() {
                created.push(self.add_script(name, content)?);
            }
        }
        Ok(created)
    }

    /// Create missing placeholder scripts
    ///
    /// Returns the scripts created by this call, or the full listing when
    /// every default was already present.
    pub fn ensure_default_scripts(&self) -> StoreResult<Vec<Script>> {
        let created = self.seed_missing_defaults()?;
        if created.is_empty() {
            self.list_scripts()
        } else {
            Ok(created)
        }
    }

    /// Path of the file backing a (sanitized) script name
    fn script_path(&self, name: &str) -> PathBuf {
        self.scripts_dir.join(script_file_name(name))
    }
}
