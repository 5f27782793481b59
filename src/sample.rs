//! Timing sample loading
//!
//! A sample is an ordered sequence of integer measurements, one per line.
//! Input order is preserved; it becomes the run index on the chart's x-axis.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a timing sample
#[derive(Error, Debug)]
pub enum SampleError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid measurement in {path} at line {line}: {text:?}")]
    Parse {
        path: PathBuf,
        line: usize,
        text: String,
    },
}

/// Load an ordered timing sample from a file.
///
/// Each line holds one integer measurement. Surrounding whitespace on a line
/// is ignored; a blank interior line is a parse error. Line numbers in errors
/// are 1-based.
pub fn load_sample(path: &Path) -> Result<Vec<i64>, SampleError> {
    let contents = fs::read_to_string(path).map_err(|source| SampleError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut values = Vec::with_capacity(contents.lines().count());
    for (index, line) in contents.lines().enumerate() {
        let text = line.trim();
        let value = text.parse::<i64>().map_err(|_| SampleError::Parse {
            path: path.to_path_buf(),
            line: index + 1,
            text: text.to_string(),
        })?;
        values.push(value);
    }

    Ok(values)
}
