//! Codemods that move a frontend off a hardcoded API endpoint.
//!
//! `fix-api-urls` replaces string literals pointing at a fixed endpoint
//! root with calls to a runtime URL helper and adds the helper's import.
//! `fix-import-order` then repairs files where that import landed inside
//! the braces of a multi-line import.

pub mod batch;
pub mod config;
pub mod core;
pub mod discovery;
pub mod reporting;
pub mod tool;
pub mod transform;
pub mod ui;

// Re-export commonly used items
pub use crate::config::Config;
pub use crate::core::{CodemodError, Result};
pub use crate::tool::{Tool, run_tool};
