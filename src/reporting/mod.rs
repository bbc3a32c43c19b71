//! Structured logging
//!
//! This module sets up `env_logger` and holds the logging helpers
//! shared by both binaries.

pub mod logging;
