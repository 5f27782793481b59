use anyhow::{Context, Result};
use clap::Parser;
use medir::chart::{self, TimingSeries};
use medir::cli::Cli;
use medir::report::{self, TsvReport};
use medir::{sample, stats};
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

/// Legend labels for the three series, in input order
const SERIES_LABELS: [&str; 3] = ["spike", "spike-tag, no tagging", "spike-tag, tagging"];

/// Report row labels for the three series, in input order
const ROW_LABELS: [&str; 3] = ["spike:", "spike-notags:", "spike-tags:"];

/// Initialize tracing subscriber for debug output
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Load one timing sample and log how many runs it holds
fn load_sample(path: &Path) -> Result<Vec<i64>> {
    let values = sample::load_sample(path)?;
    tracing::debug!(path = %path.display(), runs = values.len(), "loaded sample");
    Ok(values)
}

/// Summarize one sample, attaching the source path to any failure
fn summarize_sample(values: &[i64], path: &Path) -> Result<stats::SampleSummary> {
    stats::summarize(values).with_context(|| format!("Failed to summarize {}", path.display()))
}

fn main() -> Result<()> {
    // The tool contract is exit status 1 on a bad argument count, not clap's
    // default of 2. Help and version output still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    init_tracing();

    let spike = load_sample(&cli.spike)?;
    let no_tags = load_sample(&cli.no_tags)?;
    let tags = load_sample(&cli.tags)?;

    let summaries = [
        summarize_sample(&spike, &cli.spike)?,
        summarize_sample(&no_tags, &cli.no_tags)?,
        summarize_sample(&tags, &cli.tags)?,
    ];

    let series = [
        TimingSeries {
            label: SERIES_LABELS[0],
            values: &spike,
        },
        TimingSeries {
            label: SERIES_LABELS[1],
            values: &no_tags,
        },
        TimingSeries {
            label: SERIES_LABELS[2],
            values: &tags,
        },
    ];
    let chart_path = cli.output_dir.join(chart::CHART_FILE);
    chart::render_comparison_chart(&series, &cli.case_name, &chart_path)
        .with_context(|| format!("Failed to render {}", chart_path.display()))?;
    tracing::debug!(path = %chart_path.display(), "chart written");

    let mut summary_report = TsvReport::new();
    for (label, summary) in ROW_LABELS.into_iter().zip(summaries) {
        summary_report.add_row(label, summary);
    }
    let report_path = cli.output_dir.join(report::REPORT_FILE);
    summary_report
        .write(&report_path)
        .with_context(|| format!("Failed to write {}", report_path.display()))?;
    tracing::debug!(path = %report_path.display(), "report written");

    Ok(())
}
