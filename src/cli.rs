//! CLI argument parsing for Medir

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "medir")]
#[command(version)]
#[command(about = "Summarize and compare spike timing measurements", long_about = None)]
pub struct Cli {
    /// Timings from the plain spike run (one integer per line, nanoseconds)
    #[arg(value_name = "SPIKE_FILE")]
    pub spike: PathBuf,

    /// Timings from the tagged build with tagging disabled
    #[arg(value_name = "NOTAGS_FILE")]
    pub no_tags: PathBuf,

    /// Timings from the tagged build with tagging enabled
    #[arg(value_name = "TAGS_FILE")]
    pub tags: PathBuf,

    /// Case name embedded in the chart title
    #[arg(value_name = "CASE")]
    pub case_name: String,

    /// Directory where measurements.svg and measurements.out are written
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        default_value = "."
    )]
    pub output_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_positional_arguments() {
        let cli = Cli::parse_from(["medir", "spike.txt", "notags.txt", "tags.txt", "fib"]);
        assert_eq!(cli.spike, PathBuf::from("spike.txt"));
        assert_eq!(cli.no_tags, PathBuf::from("notags.txt"));
        assert_eq!(cli.tags, PathBuf::from("tags.txt"));
        assert_eq!(cli.case_name, "fib");
    }

    #[test]
    fn test_cli_output_dir_defaults_to_cwd() {
        let cli = Cli::parse_from(["medir", "a", "b", "c", "case"]);
        assert_eq!(cli.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_cli_output_dir_custom() {
        let cli = Cli::parse_from(["medir", "a", "b", "c", "case", "-o", "/tmp/out"]);
        assert_eq!(cli.output_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_cli_rejects_missing_case_name() {
        let result = Cli::try_parse_from(["medir", "a", "b", "c"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_extra_positional() {
        let result = Cli::try_parse_from(["medir", "a", "b", "c", "case", "extra"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_case_name_with_spaces() {
        let cli = Cli::parse_from(["medir", "a", "b", "c", "matrix multiply 64"]);
        assert_eq!(cli.case_name, "matrix multiply 64");
    }
}
