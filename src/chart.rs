//! Comparison chart rendering
//!
//! Renders the timing series as an overlaid line chart using the [`plotters`]
//! crate. Charts are saved as SVG files with fixed 1200x800 resolution.
//!
//! # Headless Compatibility
//! The SVG backend emits text as `<text>` elements instead of rasterizing it,
//! so chart generation works in headless environments (Docker/CI) without
//! system font dependencies.

use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

/// File name of the rendered chart, relative to the output directory
pub const CHART_FILE: &str = "measurements.svg";

/// Chart resolution in pixels
const CHART_SIZE: (u32, u32) = (1200, 800);

/// Series colors, assigned in declaration order
const SERIES_COLORS: [RGBColor; 3] = [BLUE, RED, GREEN];

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, ChartError>;

/// One named line series on the comparison chart
#[derive(Debug, Clone, Copy)]
pub struct TimingSeries<'a> {
    /// Legend label identifying the series
    pub label: &'a str,
    /// Measurements in run order; the run index is the x coordinate
    pub values: &'a [i64],
}

/// Render the timing series as an overlaid line chart saved as SVG.
///
/// Each series is drawn against its own run indices, with a legend entry per
/// series. The chart title embeds the case label; axes are labeled `Run` and
/// `Time [ns]`.
///
/// # Errors
/// Returns [`ChartError::InvalidData`] when no series is given or a series is
/// empty, and a drawing error when the backend fails (e.g. the output
/// directory does not exist).
pub fn render_comparison_chart(
    series: &[TimingSeries<'_>],
    case_name: &str,
    output_path: &Path,
) -> Result<()> {
    if series.is_empty() {
        return Err(ChartError::InvalidData("No series to plot".to_string()));
    }
    for entry in series {
        if entry.values.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "Series '{}' has no measurements",
                entry.label
            )));
        }
    }

    let root = SVGBackend::new(output_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::DrawingArea(e.to_string()))?;

    // Axis ranges span all series; the x-axis is the run index
    let run_count = series.iter().map(|s| s.values.len()).max().unwrap_or(1);
    let x_max = (run_count as f64 - 1.0).max(1.0);
    let y_min = series
        .iter()
        .flat_map(|s| s.values.iter())
        .fold(f64::INFINITY, |acc, &v| acc.min(v as f64));
    let mut y_max = series
        .iter()
        .flat_map(|s| s.values.iter())
        .fold(f64::NEG_INFINITY, |acc, &v| acc.max(v as f64));

    // Fix edge case: constant measurements would collapse the y range
    if y_min >= y_max {
        y_max = y_min + 1.0;
    }

    let mut chart_context = ChartBuilder::on(&root)
        .caption(format!("Case: '{}'", case_name), ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(0.0..x_max, y_min..y_max)
        .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

    chart_context
        .configure_mesh()
        .x_desc("Run")
        .x_label_style(("sans-serif", 25))
        .y_desc("Time [ns]")
        .y_label_style(("sans-serif", 25))
        .x_label_formatter(&|x| format!("{:.0}", x.round()))
        .draw()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    for (index, entry) in series.iter().enumerate() {
        let color = SERIES_COLORS[index % SERIES_COLORS.len()];
        let points: Vec<(f64, f64)> = entry
            .values
            .iter()
            .enumerate()
            .map(|(run, &value)| (run as f64, value as f64))
            .collect();

        chart_context
            .draw_series(LineSeries::new(points, &color))
            .map_err(|e| ChartError::Drawing(e.to_string()))?
            .label(entry.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart_context
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    // Ensure everything is properly rendered and saved
    root.present()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    Ok(())
}
