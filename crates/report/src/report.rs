#![allow(clippy::format_push_string)]

use crate::normalize::normalize_signals;
use crate::sparkline::sparkline;
use crate::summary::summarize_signals;
use crate::table::format_table;
use rae_signals::SignalSet;
use serde::Serialize;

/// Everything produced by one analysis run, ready to print or serialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub ticker: String,
    pub benchmark: String,
    pub raw: SignalSet,
    pub normalized: SignalSet,
    /// Number of closes the trend line covers.
    pub trend_days: usize,
    pub trend: String,
}

impl AnalysisReport {
    /// Builds a report from raw signals and the closes to draw as a trend.
    #[must_use]
    pub fn new(
        ticker: impl Into<String>,
        benchmark: impl Into<String>,
        raw: SignalSet,
        recent_closes: &[f64],
    ) -> Self {
        Self {
            ticker: ticker.into(),
            benchmark: benchmark.into(),
            normalized: normalize_signals(&raw),
            raw,
            trend_days: recent_closes.len(),
            trend: sparkline(recent_closes),
        }
    }
}

pub struct ReportFormatter;

impl ReportFormatter {
    #[must_use]
    pub fn format(report: &AnalysisReport) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str(&format!(
            "  RESEARCH REPORT: {} (benchmark {})\n",
            report.ticker, report.benchmark
        ));
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("Signals\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format_table(&report.raw, &report.normalized));
        output.push_str("\n\n");

        output.push_str(&format!("Price Trend (Last {} Days)\n", report.trend_days));
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&report.trend);
        output.push_str("\n\n");

        output.push_str("Summary\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&summarize_signals(&report.ticker, &report.raw));
        output.push('\n');

        output
    }
}
