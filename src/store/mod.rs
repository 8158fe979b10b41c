//! Script storage
//!
//! This module owns the scripts directory: locating it, seeding it with
//! placeholder scripts, and reading and writing individual scripts.

pub mod defaults;
pub mod manager;
pub mod paths;
pub mod script;

// Re-export main types
pub use defaults::*;
pub use manager::*;
pub use paths::*;
pub use script::*;
