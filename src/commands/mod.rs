//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod analyze;

// Re-export main command functions
pub use analyze::{execute_analyze, validate_args, AnalyzeArgs};
