use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::analysis::coverage::CoverageSummary;
use crate::analysis::resolver::EndTally;
use crate::cli::{log_warnings, OutputFormat};
use crate::parsing::{self, fai, tlens};
use crate::report::coverage::render_coverage;
use crate::report::{write_report, DEFAULT_COVERAGE_OUTPUT};

#[derive(Args)]
pub struct CoverageArgs {
    /// Telomere-length table (tlens_by_allele.tsv)
    #[arg(short, long, required = true)]
    pub input: PathBuf,

    /// Reference genome .fai index defining the expected chromosomes
    #[arg(short, long, required = true)]
    pub fai: PathBuf,

    /// Path for the output report
    #[arg(short, long, default_value = DEFAULT_COVERAGE_OUTPUT)]
    pub output: PathBuf,
}

pub fn run(args: CoverageArgs, format: OutputFormat) -> anyhow::Result<()> {
    // Both inputs must exist before any work starts
    parsing::require_file(&args.input)?;
    parsing::require_file(&args.fai)?;

    let index = fai::parse_fai_file(&args.fai)?;
    log_warnings(&args.fai, &index.warnings);

    let fields = tlens::read_end_fields(&args.input)?;
    let tally = EndTally::from_fields(&fields);
    info!(
        "{} rows: {} unambiguous, {} end occurrences, {} ambiguous ends",
        fields.len(),
        tally.unambiguous,
        tally.total,
        tally.ambiguous.len()
    );

    let summary = CoverageSummary::new(&index.catalog, &tally);
    let contents = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&summary)? + "\n",
        OutputFormat::Text | OutputFormat::Tsv => render_coverage(&summary),
    };

    write_report(&args.output, &contents)?;
    println!("Report successfully saved to: {}", args.output.display());

    Ok(())
}
