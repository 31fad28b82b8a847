//! JSON gap report writer.
//!
//! Writes the gap report next to the text output so CI jobs can track
//! coverage gaps without scraping stdout.

use crate::aggregator::{FileGaps, GapReport};
use crate::utils::config::REPORT_SCHEMA_VERSION;
use crate::utils::error::OutputError;
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Top-level document written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Schema version for compatibility checking
    pub version: String,

    /// Trace file the report was derived from
    pub trace_file: String,

    /// Total missed lines across all files
    pub missed_lines: u64,

    /// Under-covered files, worst first
    pub files: Vec<FileGaps>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

impl ReportDocument {
    /// Wrap a gap report with metadata
    pub fn new(report: &GapReport, trace_file: &Path) -> Self {
        Self {
            version: REPORT_SCHEMA_VERSION.to_string(),
            trace_file: trace_file.display().to_string(),
            missed_lines: report.missed_line_count(),
            files: report.files.clone(),
            generated_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Write a report document to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(
    document: &ReportDocument,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing JSON report to: {}", output_path.display());

    validate_output_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, document).map_err(OutputError::SerializationFailed)?;

    debug!("JSON report lists {} files", document.files.len());

    Ok(())
}

/// Read a report document back from disk
///
/// **Public** - useful for tooling and tests
pub fn read_report(input_path: impl AsRef<Path>) -> Result<ReportDocument, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading JSON report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let document: ReportDocument =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    Ok(document)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
