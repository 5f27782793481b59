//! Six-number summaries for timing samples
//!
//! This module wraps trueno's vector primitives and aprender's descriptive
//! statistics to produce the summary written to the report: mean, median,
//! population standard deviation, population variance, minimum and maximum.
//!
//! Population here means dividing by N rather than N-1: the measured runs are
//! treated as the entire population, not a sample drawn from one.

use anyhow::{Context, Result};
use aprender::stats::DescriptiveStats;
use trueno::Vector;

/// Six-number summary for one timing sample
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSummary {
    pub mean: f32,
    pub median: f32,
    /// Population standard deviation (divide by N)
    pub std_dev: f32,
    /// Population variance (divide by N)
    pub variance: f32,
    pub minimum: f32,
    pub maximum: f32,
}

/// Compute the six-number summary of a timing sample.
///
/// Uses trueno::Vector for SIMD-optimized mean/variance/min/max. trueno's
/// variance divides by N (population variance), and the standard deviation is
/// its square root, so the reported pair is always consistent.
///
/// # Errors
/// Fails on an empty sample (the mean is undefined).
///
/// # Example
/// ```
/// let summary = medir::stats::summarize(&[1, 2, 3, 4, 5]).unwrap();
/// assert_eq!(summary.mean, 3.0);
/// assert_eq!(summary.variance, 2.0);
/// ```
pub fn summarize(values: &[i64]) -> Result<SampleSummary> {
    if values.is_empty() {
        anyhow::bail!("Cannot summarize an empty sample");
    }

    let data: Vec<f32> = values.iter().map(|&v| v as f32).collect();
    let vector = Vector::from_slice(&data);

    let mean = vector.mean().context("Failed to compute mean")?;
    let variance = vector.variance().context("Failed to compute variance")?;
    let minimum = vector.min().context("Failed to compute minimum")?;
    let maximum = vector.max().context("Failed to compute maximum")?;
    let median = median(&vector)?;

    Ok(SampleSummary {
        mean,
        median,
        std_dev: variance.sqrt(),
        variance,
        minimum,
        maximum,
    })
}

/// Calculate median using aprender's DescriptiveStats.
///
/// Uses aprender's quantile(0.5), which implements the R-7 method: for an
/// even-length sample this averages the two middle values.
pub fn median(vector: &Vector<f32>) -> Result<f32> {
    let stats = DescriptiveStats::new(vector);
    stats
        .quantile(0.5)
        .map_err(|e| anyhow::anyhow!("Failed to compute median: {}", e))
}
