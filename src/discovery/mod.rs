//! Source file discovery
//!
//! This module walks the configured root directories and yields
//! the source files the codemods operate on.

pub mod walker;

// Re-export commonly used items
pub use walker::{FileWalk, WalkOptions, walk_files};
