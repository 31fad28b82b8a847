//! lcov-gaps CLI
//!
//! Reads an LCOV trace and prints the project source files with missed
//! lines, worst-covered first.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use lcov_gaps::commands::{execute_analyze, validate_args, AnalyzeArgs};
use lcov_gaps::parser::PathFilter;
use lcov_gaps::utils::config::{DEFAULT_TRACE_FILE, INCLUDE_MARKER};

/// lcov-gaps - list coverage gaps in an LCOV trace
#[derive(Parser, Debug)]
#[command(name = "lcov-gaps")]
#[command(version, about, long_about = None)]
struct Cli {
    /// LCOV trace file to analyze
    #[arg(default_value = DEFAULT_TRACE_FILE)]
    trace: PathBuf,

    /// Also write the report as JSON to this path
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Marker a source path must contain to be analyzed
    #[arg(long, value_name = "MARKER", default_value = INCLUDE_MARKER)]
    include: String,

    /// Extra marker that excludes a source path (repeatable)
    #[arg(long, value_name = "MARKER")]
    exclude: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging; env_logger writes to stderr so stdout carries only the report
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = AnalyzeArgs {
        trace_path: cli.trace,
        output_json: cli.json,
        filter: PathFilter::new()
            .with_include(cli.include)
            .with_exclusions(cli.exclude),
    };

    validate_args(&args)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_analyze(&args, &mut out)
}
