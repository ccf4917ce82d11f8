use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::analysis::aggregate::EndAggregate;
use crate::cli::{log_warnings, OutputFormat};
use crate::parsing::tlens;
use crate::report::summary::SummaryReport;
use crate::report::write_report;

#[derive(Args)]
pub struct SummaryArgs {
    /// Telomere-length table (tlens_by_allele.tsv)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Path for the output summary
    #[arg(required = true)]
    pub output: PathBuf,
}

pub fn run(args: SummaryArgs, format: OutputFormat) -> anyhow::Result<()> {
    let table = tlens::read_measurements(&args.input)?;
    log_warnings(&args.input, &table.warnings);

    let report = SummaryReport::new(EndAggregate::from_rows(&table.rows));
    info!(
        "{} rows kept, {} telomere ends",
        table.rows.len(),
        report.maxima.len()
    );

    let contents = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)? + "\n",
        OutputFormat::Text | OutputFormat::Tsv => report.render(),
    };

    write_report(&args.output, &contents)?;
    println!("Report successfully saved to: {}", args.output.display());

    Ok(())
}
