use std::fmt::Write;

use super::aggregate::AggregateReport;
use super::metrics::{METRIC_LABELS, MetricVector};

const SEPARATOR: &str = "-----------------------";

pub fn format_heading(report: &AggregateReport) -> String {
    format!(
        "{} ({} utterances, {} failed)",
        report.granularity.heading(),
        report.utterance_count,
        report.failed_count
    )
}

/// F, R and P families as percentages, each block closed by a separator line.
pub fn format_report(report: &AggregateReport) -> String {
    format_means(&report.means)
}

fn format_means(means: &MetricVector) -> String {
    let mut out = String::new();
    out.push_str(SEPARATOR);
    out.push('\n');
    for (index, (label, value)) in METRIC_LABELS.iter().zip(means.values()).enumerate() {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "  {label}: {:.4}", 100.0 * value);
        if index % 3 == 2 {
            out.push_str(SEPARATOR);
            out.push('\n');
        }
    }
    out
}
