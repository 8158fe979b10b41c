//! Ronix - a local organizer for Lua scripts
//!
//! Ronix keeps a per-user folder of Lua snippets, seeds it with placeholder
//! scripts, and prints script bodies so they can be piped into an external
//! injector. It never executes or injects anything itself.

// Public modules
pub mod cli;
pub mod error;
pub mod store;
pub mod ui;

// Re-export commonly used types
pub use error::{Result, RonixError, StoreError};
pub use store::{Script, ScriptStore};

/// Current version of Ronix
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
