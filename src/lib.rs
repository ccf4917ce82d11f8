//! # telo-report
//!
//! A library for turning telomere-length caller output into quality-control
//! and summary reports.
//!
//! A telomere-length caller emits one row per allele, labelled with the
//! chromosome end it was assigned to (`chr1p`, `chr1q`, ...). When the caller
//! cannot decide, the label lists every candidate end joined by commas. This
//! crate reconciles those rows against the chromosomes of a reference index.
//!
//! ## Features
//!
//! - **Chromosome catalogue**: names, lengths, and ranks from a `.fai` index,
//!   always including the unplaced `chrU` sentinel
//! - **Ambiguity resolution**: splits multi-end labels and tracks which ends
//!   were ever ambiguous
//! - **Per-end maxima**: one TL-75 value per chromosome arm
//! - **Statistics**: count/min/max/median/mean/sample stdev for autosomal
//!   ends and for all ends
//! - **Coverage**: ends expected from the index but never observed
//!
//! ## Example
//!
//! ```rust
//! use telo_report::analysis::aggregate::EndAggregate;
//! use telo_report::report::summary::SummaryReport;
//! use telo_report::parsing::tlens::read_measurements_from;
//! use std::path::Path;
//!
//! let tsv = "#chr\tTL_p75\nchr1p\t100\nchr1p,chr2p\t150\nchr2q\t90\n";
//! let table = read_measurements_from(tsv.as_bytes(), Path::new("tlens.tsv")).unwrap();
//!
//! let report = SummaryReport::new(EndAggregate::from_rows(&table.rows));
//! println!("{}", report.render());
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Chromosome records, end identifiers, and statistic types
//! - [`parsing`]: Parsers for `.fai` indexes and telomere-length tables
//! - [`analysis`]: End resolution, aggregation, statistics, and coverage
//! - [`report`]: Report rendering and writing
//! - [`cli`]: Command-line interface implementation

pub mod analysis;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod report;

// Re-export commonly used types for convenience
pub use crate::analysis::aggregate::EndAggregate;
pub use crate::analysis::coverage::CoverageSummary;
pub use crate::analysis::resolver::EndTally;
pub use crate::analysis::stats::{StatsSummary, SummaryStats};
pub use crate::core::chromosome::{ChromosomeCatalog, ChromosomeRecord};
pub use crate::core::types::*;
