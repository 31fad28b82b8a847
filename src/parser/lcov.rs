//! Streaming LCOV trace parser.
//!
//! Walks the trace line by line, tracks which source file the following
//! `DA:` records belong to and folds them into a [`CoverageMap`].

use super::filter::PathFilter;
use super::record::{classify_line, parse_line_data, TraceRecord};
use crate::aggregator::CoverageMap;
use crate::utils::error::{ParseError, TraceError};
use log::{debug, info};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Result of loading a trace from disk
#[derive(Debug)]
pub enum TraceOutcome {
    /// Trace was read and parsed; the map may be empty
    Parsed(CoverageMap),

    /// Trace file does not exist
    SourceNotFound(PathBuf),
}

/// Parser state threaded through the line loop
#[derive(Debug, Default)]
struct TraceAccumulator {
    coverage: CoverageMap,

    /// Slot of the file receiving `DA:` records, None while inside a
    /// rejected block or before the first `SF:`
    current: Option<usize>,

    skipped_records: usize,
}

impl TraceAccumulator {
    fn enter_source(&mut self, path: &str, filter: &PathFilter) {
        if filter.accepts(path) {
            debug!("Including {}", path);
            self.current = Some(self.coverage.open_file(path));
        } else {
            debug!("Skipping {}", path);
            self.current = None;
        }
    }

    fn record_line(&mut self, fields: &str, line_no: usize) -> Result<(), ParseError> {
        let Some(slot) = self.current else {
            self.skipped_records += 1;
            return Ok(());
        };

        let data = parse_line_data(fields, line_no)?;
        self.coverage.record_line(slot, data.line, data.count);
        Ok(())
    }

    fn finish(self) -> CoverageMap {
        debug!(
            "Dropped {} line records outside analyzed files",
            self.skipped_records
        );
        self.coverage
    }
}

/// Parse a trace held in memory
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `text` - Full trace contents
/// * `filter` - Decides which `SF:` blocks are aggregated
///
/// # Returns
/// Aggregates for every accepted file, in first-seen order
///
/// # Errors
/// * `ParseError` - a `DA:` record of an accepted file is malformed;
///   parsing stops at the first one
pub fn parse_trace(text: &str, filter: &PathFilter) -> Result<CoverageMap, ParseError> {
    let mut acc = TraceAccumulator::default();

    for (index, raw) in trace_lines(text).enumerate() {
        match classify_line(raw) {
            TraceRecord::SourceFile(path) => acc.enter_source(path, filter),
            TraceRecord::LineData(fields) => acc.record_line(fields, index + 1)?,
            TraceRecord::Other => {}
        }
    }

    Ok(acc.finish())
}

/// Split a trace on `\n`, `\r\n` and bare `\r`
fn trace_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().flat_map(|line| line.split('\r'))
}

/// Read and parse a trace file
///
/// **Public** - used by the analyze command
///
/// # Returns
/// * `TraceOutcome::SourceNotFound` - nothing exists at `path`
/// * `TraceOutcome::Parsed` - the file was parsed
///
/// # Errors
/// * `TraceError::Io` - the file exists but could not be read as UTF-8 text
/// * `TraceError::Parse` - a `DA:` record is malformed
pub fn load_trace(path: impl AsRef<Path>, filter: &PathFilter) -> Result<TraceOutcome, TraceError> {
    let path = path.as_ref();

    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Ok(TraceOutcome::SourceNotFound(path.to_path_buf()));
        }
        Err(source) => {
            return Err(TraceError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    debug!("Read {} bytes from {}", text.len(), path.display());

    let coverage = parse_trace(&text, filter)?;
    info!("Parsed coverage for {} source files", coverage.len());

    Ok(TraceOutcome::Parsed(coverage))
}
