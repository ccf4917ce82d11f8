use std::path::PathBuf;

use clap::Args;

use crate::cli::{log_warnings, OutputFormat};
use crate::core::chromosome::ChromosomeCatalog;
use crate::parsing::fai;

#[derive(Args)]
pub struct IndexArgs {
    /// Reference genome .fai index
    #[arg(required = true)]
    pub fai: PathBuf,
}

pub fn run(args: IndexArgs, format: OutputFormat) -> anyhow::Result<()> {
    let index = fai::parse_fai_file(&args.fai)?;
    log_warnings(&args.fai, &index.warnings);

    match format {
        OutputFormat::Text => print_text_catalog(&args, &index.catalog),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&index.catalog)?);
        }
        OutputFormat::Tsv => print_tsv_catalog(&index.catalog),
    }

    Ok(())
}

fn display_length(length: Option<u64>) -> String {
    length.map_or_else(|| "-".to_string(), |l| l.to_string())
}

fn print_text_catalog(args: &IndexArgs, catalog: &ChromosomeCatalog) {
    println!("Chromosome Catalogue");
    println!("{}", "=".repeat(60));
    println!("\nIndex: {}", args.fai.display());
    println!("Chromosomes: {}", catalog.len());
    println!();
    println!("{:>6}  {:<24} {:>12}", "Rank", "Name", "Length");

    for record in &catalog.records {
        let note = if record.synthesized { "  (added)" } else { "" };
        println!(
            "{:>6}  {:<24} {:>12}{note}",
            record.rank,
            record.name,
            display_length(record.length)
        );
    }

    println!("\nChromosome digits: {}", catalog.digits.join(", "));
}

fn print_tsv_catalog(catalog: &ChromosomeCatalog) {
    println!("rank\tname\tlength");
    for record in &catalog.records {
        println!(
            "{}\t{}\t{}",
            record.rank,
            record.name,
            display_length(record.length)
        );
    }
}
