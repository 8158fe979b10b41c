//! Error types for Ronix

use std::io;
use thiserror::Error;

/// Result type alias for Ronix operations
pub type Result<T> = std::result::Result<T, RonixError>;

/// Main error type for Ronix
#[derive(Error, Debug)]
pub enum RonixError {
    /// Script store errors
    #[error("{0}")]
    Store(#[from] StoreError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML serialization errors
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors raised by the script store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Script '{name}' not found. Available scripts: {available}")]
    NotFound { name: String, available: String },

    #[error("Failed to determine the user's home directory")]
    HomeDirUnavailable,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl StoreError {
    /// Build a not-found error listing the names currently in the store
    pub fn not_found<'a, I>(name: &str, available: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let names: Vec<&str> = available.into_iter().collect();
        let available = if names.is_empty() {
            "none".to_string()
        } else {
            names.join(", ")
        };

        StoreError::NotFound {
            name: name.to_string(),
            available,
        }
    }
}

/// Specialized result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;
