//! Medir - Descriptive statistics and comparison charts for timing measurements
//!
//! This library provides the building blocks for comparing spike timing runs:
//! loading integer-per-line measurement files, computing six-number summaries,
//! rendering an SVG comparison chart, and writing the tab-separated report.

pub mod chart;
pub mod cli;
pub mod report;
pub mod sample;
pub mod stats;
