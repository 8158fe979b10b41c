//! Scripts directory location and file naming

use crate::error::{StoreError, StoreResult};
use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// File extension carried by every script in the store
pub const SCRIPT_EXTENSION: &str = "lua";

/// Directory under the home directory that holds all Ronix data
const APP_DIR_NAME: &str = ".ronix_executor";

/// Subdirectory of the app directory holding the scripts
const SCRIPTS_DIR_NAME: &str = "scripts";

/// Default scripts directory relative to a given home directory
pub fn default_scripts_dir_in(home: &Path) -> PathBuf {
    home.join(APP_DIR_NAME).join(SCRIPTS_DIR_NAME)
}

/// Default scripts directory for the current user
///
/// Lives under the home directory so it is writable without elevated
/// privileges on desktop and mobile platforms alike.
pub fn default_scripts_dir() -> StoreResult<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or(StoreError::HomeDirUnavailable)?;
    Ok(default_scripts_dir_in(base_dirs.home_dir()))
}

/// Replace spaces with underscores so a user-supplied name can be a file name
pub fn sanitize_name(name: &str) -> String {
    name.replace(' ', "_")
}

/// File name for a script with the given (already sanitized) name
pub fn script_file_name(name: &str) -> String {
    format!("{}.{}", name, SCRIPT_EXTENSION)
}
