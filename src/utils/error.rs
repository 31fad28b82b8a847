//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while parsing a trace.
///
/// Always fatal: parsing stops at the first malformed record.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("line {line}: DA record is missing its {field} field")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: invalid {field} '{value}' in DA record: {source}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Errors that can occur while loading a trace file
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Failed to read trace {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed trace: {0}")]
    Parse(#[from] ParseError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
