//! Per-file running tallies built while streaming a trace.
//!
//! The counters track records *processed*, not distinct lines. When a trace
//! repeats a file block (several test binaries writing into one report),
//! every repeated `DA:` record bumps `total_records` again while
//! `line_counts` keeps only the last value seen for the line. Reported
//! percentages depend on this, so it is kept as is.

use std::collections::{BTreeMap, HashMap};

/// Running aggregate for a single source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAggregate {
    /// Path exactly as it appeared after `SF:`
    pub path: String,

    /// Line number -> most recently seen execution count
    pub line_counts: BTreeMap<i64, i64>,

    /// Number of `DA:` records processed for this file
    pub total_records: u64,

    /// Number of processed records whose count was positive
    pub hit_records: u64,
}

impl FileAggregate {
    /// Create an empty aggregate for a path
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            line_counts: BTreeMap::new(),
            total_records: 0,
            hit_records: 0,
        }
    }

    /// Account for one `DA:` record
    pub fn record_line(&mut self, line: i64, count: i64) {
        self.line_counts.insert(line, count);
        self.total_records += 1;
        if count > 0 {
            self.hit_records += 1;
        }
    }

    /// Fraction of hit records, 1.0 when nothing was recorded
    pub fn ratio(&self) -> f64 {
        if self.total_records == 0 {
            1.0
        } else {
            self.hit_records as f64 / self.total_records as f64
        }
    }

    /// Coverage percentage derived from [`ratio`](Self::ratio)
    pub fn percentage(&self) -> f64 {
        self.ratio() * 100.0
    }

    /// Line numbers whose latest count is zero, ascending
    pub fn missed_lines(&self) -> Vec<i64> {
        self.line_counts
            .iter()
            .filter(|(_, count)| **count == 0)
            .map(|(&line, _)| line)
            .collect()
    }
}

/// Aggregates keyed by path, iterated in first-seen order
#[derive(Debug, Clone, Default)]
pub struct CoverageMap {
    files: Vec<FileAggregate>,
    index: HashMap<String, usize>,
}

impl CoverageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the slot for `path`, creating an empty aggregate on first sight
    ///
    /// A path that shows up again later in the trace resolves to the slot
    /// created the first time, so its records keep accumulating there.
    pub fn open_file(&mut self, path: &str) -> usize {
        if let Some(&slot) = self.index.get(path) {
            return slot;
        }

        let slot = self.files.len();
        self.files.push(FileAggregate::new(path));
        self.index.insert(path.to_string(), slot);
        slot
    }

    /// Record a `DA:` entry against a slot returned by [`open_file`](Self::open_file)
    pub fn record_line(&mut self, slot: usize, line: i64, count: i64) {
        if let Some(file) = self.files.get_mut(slot) {
            file.record_line(line, count);
        }
    }

    /// Look up an aggregate by its exact path
    pub fn get(&self, path: &str) -> Option<&FileAggregate> {
        self.index.get(path).map(|&slot| &self.files[slot])
    }

    /// Iterate aggregates in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &FileAggregate> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_line_counts_hits() {
        let mut file = FileAggregate::new("src/lib.rs");
        file.record_line(1, 4);
        file.record_line(2, 0);
        file.record_line(3, 1);

        assert_eq!(file.total_records, 3);
        assert_eq!(file.hit_records, 2);
        assert_eq!(file.missed_lines(), vec![2]);
    }

    #[test]
    fn test_repeated_line_overwrites_but_still_counts() {
        let mut file = FileAggregate::new("src/lib.rs");
        file.record_line(5, 0);
        file.record_line(5, 2);

        assert_eq!(file.total_records, 2);
        assert_eq!(file.hit_records, 1);
        assert_eq!(file.line_counts[&5], 2);
        assert!(file.missed_lines().is_empty());
    }

    #[test]
    fn test_empty_aggregate_ratio_is_perfect() {
        let file = FileAggregate::new("src/empty.rs");
        assert_eq!(file.ratio(), 1.0);
        assert_eq!(file.percentage(), 100.0);
    }

    #[test]
    fn test_open_file_reuses_slot() {
        let mut map = CoverageMap::new();
        let a = map.open_file("src/a.rs");
        let b = map.open_file("src/b.rs");
        let again = map.open_file("src/a.rs");

        assert_eq!(a, again);
        assert_ne!(a, b);
        assert_eq!(map.len(), 2);

        map.record_line(again, 1, 0);
        assert_eq!(map.get("src/a.rs").unwrap().total_records, 1);
    }

    #[test]
    fn test_iteration_follows_first_seen_order() {
        let mut map = CoverageMap::new();
        map.open_file("src/z.rs");
        map.open_file("src/a.rs");
        map.open_file("src/z.rs");

        let paths: Vec<&str> = map.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["src/z.rs", "src/a.rs"]);
    }
}
