//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Loads and parses the trace
//! 2. Builds the gap report
//! 3. Prints the text report
//! 4. Writes the JSON report (if requested)

use crate::aggregator::build_gap_report;
use crate::output::{render_report, write_report, ReportDocument};
use crate::parser::{load_trace, PathFilter, TraceOutcome};
use crate::utils::config::DEFAULT_TRACE_FILE;
use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// LCOV trace to read
    pub trace_path: PathBuf,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Which source files take part in the analysis
    pub filter: PathFilter,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            trace_path: PathBuf::from(DEFAULT_TRACE_FILE),
            output_json: None,
            filter: PathFilter::default(),
        }
    }
}

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// A missing trace file is reported on `out` and is not an error.
///
/// # Errors
/// * Malformed `DA:` records (fatal, nothing is printed)
/// * Trace read failures other than a missing file
/// * JSON report write errors
pub fn execute_analyze(args: &AnalyzeArgs, out: &mut impl Write) -> Result<()> {
    let start_time = Instant::now();

    info!("Analyzing coverage trace: {}", args.trace_path.display());

    info!("Step 1/3: Parsing trace...");
    let coverage = match load_trace(&args.trace_path, &args.filter)
        .with_context(|| format!("Failed to analyze {}", args.trace_path.display()))?
    {
        TraceOutcome::Parsed(coverage) => coverage,
        TraceOutcome::SourceNotFound(path) => {
            writeln!(out, "Error: {} not found", path.display())?;
            return Ok(());
        }
    };

    info!("Step 2/3: Computing coverage gaps...");
    let report = build_gap_report(&coverage);
    debug!(
        "{} files with gaps, {} missed lines",
        report.files.len(),
        report.missed_line_count()
    );

    if report.is_empty() {
        info!("No coverage gaps found");
    }

    info!("Step 3/3: Rendering report...");
    out.write_all(render_report(&report).as_bytes())
        .context("Failed to write report")?;
    out.flush()?;

    if let Some(json_path) = &args.output_json {
        let document = ReportDocument::new(&report, &args.trace_path);
        write_report(&document, json_path).context("Failed to write JSON report")?;
    }

    info!("Analysis complete in {:.2?}", start_time.elapsed());

    Ok(())
}

/// Validate analyze arguments
///
/// **Public** - called before execution to fail fast
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.filter.include.is_empty() {
        bail!("Include marker cannot be empty");
    }

    if args.filter.exclude.iter().any(String::is_empty) {
        bail!("Exclude markers cannot be empty (an empty marker rejects every file)");
    }

    if args.output_json.as_ref() == Some(&args.trace_path) {
        bail!("JSON output would overwrite the trace file");
    }

    Ok(())
}
