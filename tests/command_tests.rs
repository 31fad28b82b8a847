//! Smoke tests for the lcov-gaps binary

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use lcov_gaps::output::read_report;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const TRACE: &str = "\
SF:/repo/src/lib.rs
DA:1,1
DA:2,0
DA:3,0
DA:5,0
end_of_record
SF:/repo/target/debug/build/out.rs
DA:1,0
end_of_record
";

fn lcov_gaps() -> Command {
    Command::cargo_bin("lcov-gaps").expect("lcov-gaps binary should exist")
}

fn write_trace(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_help_flag() {
    lcov_gaps()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("LCOV"));
}

#[test]
fn test_report_on_stdout() {
    let dir = TempDir::new().unwrap();
    let trace = write_trace(&dir, "cov.info", TRACE);

    lcov_gaps()
        .arg(&trace)
        .assert()
        .success()
        .stdout(
            "Coverage Gaps Analysis:\n=======================\n\nFile: /repo/src/lib.rs\nCoverage: 25.00% (1/4)\nMissed Lines: 2-3, 5\n",
        );
}

#[test]
fn test_default_trace_name() {
    let dir = TempDir::new().unwrap();
    write_trace(&dir, "lcov.info", TRACE);

    lcov_gaps()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("File: /repo/src/lib.rs"));
}

#[test]
fn test_missing_trace_exits_successfully() {
    let dir = TempDir::new().unwrap();

    lcov_gaps()
        .current_dir(dir.path())
        .arg("nope.info")
        .assert()
        .success()
        .stdout("Error: nope.info not found\n");
}

#[test]
fn test_malformed_trace_fails() {
    let dir = TempDir::new().unwrap();
    let trace = write_trace(&dir, "bad.info", "SF:/repo/src/lib.rs\nDA:one,1\n");

    lcov_gaps()
        .arg(&trace)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_output_is_stable_across_runs() {
    let dir = TempDir::new().unwrap();
    let trace = write_trace(&dir, "cov.info", TRACE);

    let first = lcov_gaps().arg(&trace).output().unwrap();
    let second = lcov_gaps().arg(&trace).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_extra_exclusion() {
    let dir = TempDir::new().unwrap();
    let trace = write_trace(&dir, "cov.info", TRACE);

    lcov_gaps()
        .arg(&trace)
        .args(["--exclude", "lib.rs"])
        .assert()
        .success()
        .stdout("Coverage Gaps Analysis:\n=======================\n");
}

#[test]
fn test_json_side_output() {
    let dir = TempDir::new().unwrap();
    let trace = write_trace(&dir, "cov.info", TRACE);
    let json_path = dir.path().join("reports/gaps.json");

    lcov_gaps()
        .arg(&trace)
        .arg("--json")
        .arg(&json_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Missed Lines: 2-3, 5"));

    let document = read_report(&json_path).unwrap();
    assert_eq!(document.files.len(), 1);
    assert_eq!(document.files[0].hit_records, 1);
    assert_eq!(document.missed_lines, 3);
}
