//! Configuration and constants for the CLI.

/// Trace file read when no path is given on the command line
pub const DEFAULT_TRACE_FILE: &str = "lcov.info";

/// Version of the JSON report layout
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

// Path markers used to decide which SF: entries belong to the project.
// A path must contain INCLUDE_MARKER and none of EXCLUDE_MARKERS.
pub const INCLUDE_MARKER: &str = "src/";
pub const EXCLUDE_MARKERS: &[&str] = &["test/", "tests/", "target/", ".cargo/", ".rustup/"];

// Record prefixes in the LCOV trace format
pub const SOURCE_FILE_PREFIX: &str = "SF:";
pub const LINE_DATA_PREFIX: &str = "DA:";

/// Banner printed ahead of every report
pub const REPORT_BANNER: &str = "Coverage Gaps Analysis:\n=======================\n";
