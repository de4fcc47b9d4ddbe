//! # Utility Functions and Helpers
//!
//! Shared helpers for the CLI that are not specific to a single command.

/// Tracing subscriber setup
pub mod logging;

pub use logging::initialize_logging;
