//! Core data types for telomere-end reporting.
//!
//! - [`ChromosomeRecord`] / [`ChromosomeCatalog`]: the chromosomes of a
//!   reference index with their rank and length
//! - [`end`]: telomere end identifiers, sex-chromosome classification, and
//!   the natural ordering used by the coverage report
//! - [`RawMeasurementRow`], [`Metric`], [`StatValue`]: measurement rows and
//!   reported statistics
//!
//! ## End Naming
//!
//! | Chromosome | Short arm | Long arm |
//! |------------|-----------|----------|
//! | chr1       | chr1p     | chr1q    |
//! | chrX       | chrXp     | chrXq    |
//!
//! A caller that cannot place a measurement on one arm emits the candidates
//! joined by commas, e.g. `chr1p,chr2p`.
//!
//! [`ChromosomeRecord`]: chromosome::ChromosomeRecord
//! [`ChromosomeCatalog`]: chromosome::ChromosomeCatalog
//! [`RawMeasurementRow`]: types::RawMeasurementRow
//! [`Metric`]: types::Metric
//! [`StatValue`]: types::StatValue

pub mod chromosome;
pub mod end;
pub mod types;
