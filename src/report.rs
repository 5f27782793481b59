//! Tab-separated summary report
//!
//! Builds the flat report written next to the chart: a fixed header row plus
//! one labeled row of six statistics per sample, in insertion order.

use crate::stats::SampleSummary;
use std::fs;
use std::io;
use std::path::Path;

/// File name of the summary report, relative to the output directory
pub const REPORT_FILE: &str = "measurements.out";

/// Report header row
const HEADER: &str = "type\tmean\tmedian\tstd dev\tvariance\tminimum\tmaximum";

/// Tab-separated report formatter
#[derive(Debug, Default)]
pub struct TsvReport {
    rows: Vec<(String, SampleSummary)>,
}

impl TsvReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a labeled summary row; rows appear in insertion order
    pub fn add_row(&mut self, label: &str, summary: SampleSummary) {
        self.rows.push((label.to_string(), summary));
    }

    /// Format a summary as one labeled row.
    ///
    /// Values use the shortest float representation, so integral statistics
    /// print without a trailing `.0`.
    fn format_row(label: &str, summary: &SampleSummary) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            label,
            summary.mean,
            summary.median,
            summary.std_dev,
            summary.variance,
            summary.minimum,
            summary.maximum
        )
    }

    /// Generate the report as a string
    pub fn to_tsv(&self) -> String {
        let mut output = String::new();
        output.push_str(HEADER);
        output.push('\n');

        for (label, summary) in &self.rows {
            output.push_str(&Self::format_row(label, summary));
            output.push('\n');
        }

        output
    }

    /// Write the report to disk
    pub fn write(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_tsv())
    }
}
