//! Command-line interface for telo-report.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **coverage**: Report ambiguous and missing chromosome ends against a reference index
//! - **summary**: Report the maximum TL-75 per end with summary statistics
//! - **index**: Show the chromosome catalogue built from a reference index
//!
//! ## Usage
//!
//! ```text
//! # Chromosome-end coverage
//! telo-report coverage -i tlens_by_allele.tsv -f genome.fa.fai -o telomere_report.txt
//!
//! # TL-75 summary
//! telo-report summary tlens_by_allele.tsv tl75_summary.tsv
//!
//! # JSON instead of text
//! telo-report --format json summary tlens_by_allele.tsv tl75_summary.json
//! ```
//!
//! ## Exit Status
//!
//! | Status | Meaning |
//! |--------|---------|
//! | 0 | Success |
//! | 1 | Other failure |
//! | 2 | Input file not found |
//! | 3 | Required column missing |
//! | 4 | Report could not be written |

use clap::{Parser, Subcommand};

use crate::parsing::{ParseError, ParseWarning};
use crate::report::ReportError;

pub mod coverage;
pub mod index;
pub mod summary;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_MISSING_FILE: u8 = 2;
pub const EXIT_SCHEMA: u8 = 3;
pub const EXIT_WRITE: u8 = 4;

#[derive(Parser)]
#[command(name = "telo-report")]
#[command(version)]
#[command(about = "Quality-control and summary reports for telomere-length tables")]
#[command(
    long_about = "telo-report reconciles a telomere-length caller's per-allele table with a reference genome index.\n\nIt produces:\n- A chromosome-end coverage report (ambiguous and missing ends)\n- A TL-75 summary (maximum per end, with autosome and all-end statistics)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report ambiguous and missing chromosome ends
    Coverage(coverage::CoverageArgs),

    /// Summarize maximum TL-75 per chromosome end
    Summary(summary::SummaryArgs),

    /// Show the chromosome catalogue of a reference index
    Index(index::IndexArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Run the selected command
///
/// # Errors
///
/// Returns the command's error; see [`exit_status`] for how kinds map to
/// process exit codes.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Coverage(args) => coverage::run(args, cli.format),
        Commands::Summary(args) => summary::run(args, cli.format),
        Commands::Index(args) => index::run(args, cli.format),
    }
}

/// Process exit code for a failed run
pub fn exit_status(err: &anyhow::Error) -> u8 {
    if let Some(parse) = err.downcast_ref::<ParseError>() {
        match parse {
            ParseError::MissingFile(_) => EXIT_MISSING_FILE,
            ParseError::MissingColumn { .. } => EXIT_SCHEMA,
            ParseError::Io { .. } | ParseError::InvalidFormat { .. } => EXIT_FAILURE,
        }
    } else if err.downcast_ref::<ReportError>().is_some() {
        EXIT_WRITE
    } else {
        EXIT_FAILURE
    }
}

/// Surface recoverable parse problems through the log
pub(crate) fn log_warnings(source: &std::path::Path, warnings: &[ParseWarning]) {
    for warning in warnings {
        tracing::warn!("{}: {warning}", source.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_status() {
        let missing = anyhow::Error::new(ParseError::MissingFile(PathBuf::from("a.tsv")));
        assert_eq!(exit_status(&missing), EXIT_MISSING_FILE);

        let schema = anyhow::Error::new(ParseError::MissingColumn {
            path: PathBuf::from("a.tsv"),
            column: "TL_p75".to_string(),
        });
        assert_eq!(exit_status(&schema), EXIT_SCHEMA);

        let write = anyhow::Error::new(ReportError::Write {
            path: PathBuf::from("out.txt"),
            source: std::io::Error::other("disk full"),
        });
        assert_eq!(exit_status(&write), EXIT_WRITE);

        assert_eq!(exit_status(&anyhow::anyhow!("boom")), EXIT_FAILURE);
    }

    #[test]
    fn test_cli_parses_coverage_defaults() {
        let cli = Cli::parse_from(["telo-report", "coverage", "-i", "t.tsv", "-f", "g.fai"]);
        match cli.command {
            Commands::Coverage(args) => {
                assert_eq!(args.output, PathBuf::from(crate::report::DEFAULT_COVERAGE_OUTPUT));
            }
            _ => panic!("expected coverage command"),
        }
        assert_eq!(cli.format, OutputFormat::Text);
    }
}
