//! Derive the gap report from coverage aggregates.
//!
//! Files are ordered by ascending hit ratio so the worst-covered files come
//! first. Fully covered files and files without any line records are left
//! out; the rest carry their missed lines folded into contiguous ranges.

use super::coverage::{CoverageMap, FileAggregate};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive run of consecutive missed lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissedRange {
    pub start: i64,
    pub end: i64,
}

impl MissedRange {
    pub fn single(line: i64) -> Self {
        Self { start: line, end: line }
    }

    /// Number of lines covered by the range
    pub fn line_count(&self) -> u64 {
        self.end.abs_diff(self.start).saturating_add(1)
    }
}

impl fmt::Display for MissedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Gap details for one under-covered file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileGaps {
    /// Path as it appeared in the trace
    pub path: String,

    /// Records with a positive execution count
    pub hit_records: u64,

    /// All records processed for the file
    pub total_records: u64,

    /// hit_records / total_records * 100
    pub percentage: f64,

    /// Missed lines grouped into ranges, ascending
    pub missed_ranges: Vec<MissedRange>,
}

/// Ordered list of under-covered files
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GapReport {
    pub files: Vec<FileGaps>,
}

impl GapReport {
    /// True when no file has a coverage gap
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total number of missed lines across all files
    pub fn missed_line_count(&self) -> u64 {
        self.files
            .iter()
            .flat_map(|file| file.missed_ranges.iter())
            .map(MissedRange::line_count)
            .sum()
    }
}

/// Build the gap report from parsed coverage
///
/// **Public** - main entry point for gap derivation
///
/// # Algorithm
/// 1. Stable-sort aggregates by ascending ratio (empty files count as 1.0)
/// 2. Drop files without records and files at exactly 100%
/// 3. Group each remaining file's zero-count lines into ranges
pub fn build_gap_report(coverage: &CoverageMap) -> GapReport {
    let mut ordered: Vec<&FileAggregate> = coverage.iter().collect();
    // sort_by is stable: equal ratios keep first-seen order
    ordered.sort_by(|a, b| a.ratio().total_cmp(&b.ratio()));

    let files: Vec<FileGaps> = ordered
        .into_iter()
        .filter(|file| file.total_records > 0)
        .filter_map(file_gaps)
        .collect();

    debug!(
        "{} of {} files have coverage gaps",
        files.len(),
        coverage.len()
    );

    GapReport { files }
}

/// Gap details for one aggregate, None when it is fully covered
///
/// **Private** - internal helper for build_gap_report
fn file_gaps(file: &FileAggregate) -> Option<FileGaps> {
    let percentage = file.percentage();
    if percentage == 100.0 {
        return None;
    }

    Some(FileGaps {
        path: file.path.clone(),
        hit_records: file.hit_records,
        total_records: file.total_records,
        percentage,
        missed_ranges: group_missed_lines(&file.missed_lines()),
    })
}

/// Fold ascending line numbers into maximal runs of consecutive integers
pub fn group_missed_lines(lines: &[i64]) -> Vec<MissedRange> {
    let mut ranges: Vec<MissedRange> = Vec::new();

    for &line in lines {
        match ranges.last_mut() {
            Some(current) if current.end.checked_add(1) == Some(line) => current.end = line,
            _ => ranges.push(MissedRange::single(line)),
        }
    }

    ranges
}

/// Render ranges as `3-5, 9, 12-13`
pub fn format_ranges(ranges: &[MissedRange]) -> String {
    ranges
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
