//! Text summary builder for non-interactive output.
//!
//! Formats the per-series statistics and the shared bin layout as plain
//! lines for text mode.

use crate::model::{Report, Series, CHART_TITLE};

/// Pre-formatted lines for text output.
pub(crate) struct TextSummary {
    pub lines: Vec<String>,
}

pub(crate) fn build_text_summary(report: &Report) -> TextSummary {
    let mut lines = Vec::new();

    lines.push(CHART_TITLE.to_string());
    lines.push(format!(
        "Shared bins: {} edges spanning {:.0} .. {:.0} ns",
        report.edges.len(),
        report.edges.first().copied().unwrap_or(f64::NAN),
        report.edges.last().copied().unwrap_or(f64::NAN),
    ));
    lines.push(format!(
        "Joint min-max range: {:.0} .. {:.0} ns (normalized samples in --json output)",
        report.scaler.min, report.scaler.max,
    ));
    lines.push(series_line(&report.mutex));
    lines.push(series_line(&report.sem));

    TextSummary { lines }
}

fn series_line(series: &Series) -> String {
    let m = &series.summary;
    format!(
        "{:<9} n {}  min {:.0}  max {:.0}  avg {:.1}  med {:.0}  p25 {:.0}  p75 {:.0}  p95 {:.0}  p99 {:.0}  stddev {:.1} ns",
        format!("{}:", series.label),
        m.count,
        m.min_ns,
        m.max_ns,
        m.mean_ns,
        m.median_ns,
        m.p25_ns,
        m.p75_ns,
        m.p95_ns,
        m.p99_ns,
        m.stddev_ns,
    )
}
