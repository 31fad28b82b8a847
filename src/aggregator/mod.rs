//! Aggregation of trace records into per-file coverage and gap reports.
//!
//! This module transforms parsed line records into:
//! - Per-file running tallies (hit/total records, latest line counts)
//! - A report of under-covered files ordered by coverage ratio
//! - Missed lines grouped into contiguous ranges

pub mod coverage;
pub mod gaps;

// Re-export main types and functions
pub use coverage::{CoverageMap, FileAggregate};
pub use gaps::{build_gap_report, format_ranges, group_missed_lines, FileGaps, GapReport, MissedRange};
