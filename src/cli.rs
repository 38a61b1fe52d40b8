//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use serde::Deserialize;

#[derive(Debug, Parser)]
#[command(
    name = "dirmatch",
    version,
    about = "Compare two output directory trees file by file",
    long_about = "dirmatch pairs the files of a reference directory (D) with those of a \
                  test directory (T), by name first and then by closest size, and \
                  classifies every pair by size and content hash.\n\n\
                  Results are printed as one table per directory and written to a CSV file."
)]
pub struct Cli {
    /// Reference directory
    pub dir_d: PathBuf,

    /// Test directory
    pub dir_t: PathBuf,

    /// CSV file to write (defaults to output.csv)
    pub output: Option<PathBuf>,

    /// Compare every common subdirectory, not just the two roots
    #[arg(short, long)]
    pub recursive: bool,

    /// Skip subdirectories whose path contains any of these substrings
    #[arg(short, long, value_delimiter = ',', value_name = "PATTERNS")]
    pub exclude: Vec<String>,

    /// Output format for the terminal report
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Read defaults from a TOML file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Largest detail listing printed before pointing at the CSV
    #[arg(long, value_name = "N")]
    pub display_cap: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_exclude_splits_on_commas() {
        let cli = Cli::try_parse_from(["dirmatch", "d", "t", "-r", "-e", "tmp,cache"]).unwrap();
        assert_eq!(cli.exclude, vec!["tmp", "cache"]);
        assert!(cli.recursive);
        assert_eq!(cli.output, None);
    }

    #[test]
    fn test_missing_positional_is_error() {
        assert!(Cli::try_parse_from(["dirmatch", "d"]).is_err());
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["dirmatch", "d", "t", "out.csv", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, Some(PathBuf::from("out.csv")));
    }
}
