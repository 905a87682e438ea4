//! QuickRec Common Utilities
//!
//! Shared infrastructure for all QuickRec crates:
//! - Error types and result aliases
//! - Tracing/logging initialization
//! - Configuration loading
//! - Output path conventions

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;

pub use config::*;
pub use error::*;
pub use paths::*;
