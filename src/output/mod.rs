//! Output writers for gap reports.
//!
//! This module handles:
//! - The plain-text report printed to stdout
//! - JSON reports written to disk

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, write_report, ReportDocument};
pub use text::{render_file_section, render_report};
