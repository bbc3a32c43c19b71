//! Batch processing
//!
//! This module runs a codemod over every discovered file, writing
//! changes back in place and isolating per-file failures.

pub mod runner;

// Re-export commonly used items
pub use runner::{BatchReporter, BatchSummary, process_file, run_batch};
