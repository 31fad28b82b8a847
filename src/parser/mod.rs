//! Trace parsing and source filtering.
//!
//! This module handles:
//! - Classifying LCOV trace lines
//! - Deciding which source files belong to the project
//! - Folding line records into per-file aggregates

pub mod filter;
pub mod lcov;
pub mod record;

// Re-export main types
pub use filter::PathFilter;
pub use lcov::{load_trace, parse_trace, TraceOutcome};
pub use record::{classify_line, parse_line_data, LineData, TraceRecord};
