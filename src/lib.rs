//! lcov-gaps
//!
//! Finds under-covered source files in an LCOV trace and lists the
//! exact line ranges that were never executed.
//!
//! This crate provides the core implementation for the
//! `lcov-gaps` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! cargo llvm-cov --lcov --output-path lcov.info
//! lcov-gaps lcov.info
//! ```
//!
//! ## Library use
//!
//! ```no_run
//! use lcov_gaps::aggregator::build_gap_report;
//! use lcov_gaps::output::render_report;
//! use lcov_gaps::parser::{parse_trace, PathFilter};
//!
//! let trace = std::fs::read_to_string("lcov.info")?;
//! let coverage = parse_trace(&trace, &PathFilter::default())?;
//! print!("{}", render_report(&build_gap_report(&coverage)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
