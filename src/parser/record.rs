//! Classification of individual LCOV trace lines.
//!
//! Only two record kinds matter to the analyzer:
//! - `SF:<path>` opens a source-file block
//! - `DA:<line>,<count>[,<checksum>]` reports one line's execution count
//!
//! Everything else (TN, FN, FNDA, BRDA, LF, LH, end_of_record, blank lines)
//! is classified as [`TraceRecord::Other`] and skipped by the caller.

use crate::utils::config::{LINE_DATA_PREFIX, SOURCE_FILE_PREFIX};
use crate::utils::error::ParseError;
use std::num::IntErrorKind;

/// One classified trace line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceRecord<'a> {
    /// `SF:` marker carrying the verbatim file path
    SourceFile(&'a str),

    /// `DA:` record with its comma-separated fields still unparsed
    LineData(&'a str),

    /// Any record the analyzer does not consume
    Other,
}

/// Payload of a `DA:` record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineData {
    /// Source line number
    pub line: i64,

    /// Execution count reported for the line, clamped to the i64 range
    pub count: i64,
}

/// Classify a single raw trace line
///
/// **Public** - called once per line by the trace parser
///
/// Surrounding whitespace (including a trailing `\r`) is ignored.
/// `DA:` fields are only parsed when the record is actually used, so
/// records inside skipped blocks are never validated.
pub fn classify_line(raw: &str) -> TraceRecord<'_> {
    let line = raw.trim();

    if let Some(path) = line.strip_prefix(SOURCE_FILE_PREFIX) {
        TraceRecord::SourceFile(path)
    } else if let Some(fields) = line.strip_prefix(LINE_DATA_PREFIX) {
        TraceRecord::LineData(fields)
    } else {
        TraceRecord::Other
    }
}

/// Parse the comma-separated body of a `DA:` record
///
/// **Public** - used by the trace parser for records of analyzed files
///
/// # Arguments
/// * `fields` - Text after `DA:`, e.g. `12,3` or `12,3,<checksum>`
/// * `line_no` - 1-based position in the trace, used for error reporting
///
/// # Errors
/// * `ParseError::MissingField` - no count field
/// * `ParseError::InvalidNumber` - line or count is not an integer
pub fn parse_line_data(fields: &str, line_no: usize) -> Result<LineData, ParseError> {
    let mut parts = fields.split(',');

    // split always yields at least one item, so an empty body surfaces as an
    // invalid line number rather than a missing field
    let line_field = parts.next().unwrap_or_default();
    let count_field = parts.next().ok_or(ParseError::MissingField {
        line: line_no,
        field: "count",
    })?;

    Ok(LineData {
        line: parse_field(line_field, "line number", line_no)?,
        count: parse_count(count_field, line_no)?,
    })
}

fn parse_field(value: &str, field: &'static str, line_no: usize) -> Result<i64, ParseError> {
    let value = value.trim();
    value.parse::<i64>().map_err(|source| ParseError::InvalidNumber {
        line: line_no,
        field,
        value: value.to_string(),
        source,
    })
}

/// Counts only matter by sign, so out-of-range integers saturate instead of failing
fn parse_count(value: &str, line_no: usize) -> Result<i64, ParseError> {
    match parse_field(value, "execution count", line_no) {
        Err(ParseError::InvalidNumber { source, .. })
            if *source.kind() == IntErrorKind::PosOverflow =>
        {
            Ok(i64::MAX)
        }
        Err(ParseError::InvalidNumber { source, .. })
            if *source.kind() == IntErrorKind::NegOverflow =>
        {
            Ok(i64::MIN)
        }
        other => other,
    }
}
