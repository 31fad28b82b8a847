//! Plain-text rendering of gap reports.
//!
//! The layout is consumed by people and by scripts diffing successive runs,
//! so it is kept stable byte for byte.

use crate::aggregator::{format_ranges, FileGaps, GapReport};
use crate::utils::config::REPORT_BANNER;

/// Render the full report: banner followed by one section per file
pub fn render_report(report: &GapReport) -> String {
    let mut out = String::from(REPORT_BANNER);

    for file in &report.files {
        out.push_str(&render_file_section(file));
    }

    out
}

/// Render one file section, including its leading blank line
pub fn render_file_section(file: &FileGaps) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("File: {}\n", file.path));
    out.push_str(&format!(
        "Coverage: {:.2}% ({}/{})\n",
        file.percentage, file.hit_records, file.total_records
    ));
    out.push_str(&format!(
        "Missed Lines: {}\n",
        format_ranges(&file.missed_ranges)
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::MissedRange;
    use pretty_assertions::assert_eq;

    fn gaps(path: &str, hit: u64, total: u64, ranges: Vec<MissedRange>) -> FileGaps {
        FileGaps {
            path: path.to_string(),
            hit_records: hit,
            total_records: total,
            percentage: hit as f64 / total as f64 * 100.0,
            missed_ranges: ranges,
        }
    }

    #[test]
    fn test_empty_report_is_banner_only() {
        let out = render_report(&GapReport::default());
        assert_eq!(out, "Coverage Gaps Analysis:\n=======================\n");
    }

    #[test]
    fn test_render_file_section() {
        let file = gaps(
            "/repo/src/lib.rs",
            2,
            3,
            vec![MissedRange::single(7)],
        );

        assert_eq!(
            render_file_section(&file),
            "\nFile: /repo/src/lib.rs\nCoverage: 66.67% (2/3)\nMissed Lines: 7\n"
        );
    }

    #[test]
    fn test_render_report_with_two_files() {
        let report = GapReport {
            files: vec![
                gaps("src/a.rs", 0, 2, vec![MissedRange { start: 1, end: 2 }]),
                gaps(
                    "src/b.rs",
                    1,
                    4,
                    vec![MissedRange::single(2), MissedRange { start: 4, end: 5 }],
                ),
            ],
        };

        let expected = "\
Coverage Gaps Analysis:
=======================

File: src/a.rs
Coverage: 0.00% (0/2)
Missed Lines: 1-2

File: src/b.rs
Coverage: 25.00% (1/4)
Missed Lines: 2, 4-5
";
        assert_eq!(render_report(&report), expected);
    }

    #[test]
    fn test_negative_lines_render() {
        let file = gaps("src/neg.rs", 0, 2, vec![MissedRange::single(-1), MissedRange::single(2)]);
        assert!(render_file_section(&file).ends_with("Missed Lines: -1, 2\n"));
    }

    #[test]
    fn test_empty_ranges_still_render_label() {
        let file = gaps("src/dup.rs", 1, 2, vec![]);
        assert!(render_file_section(&file).ends_with("Missed Lines: \n"));
    }
}
