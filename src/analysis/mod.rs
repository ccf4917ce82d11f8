//! End resolution, aggregation, and statistics.
//!
//! ## Pipeline
//!
//! 1. **Resolution** ([`resolver`]): split each row's end label on commas and
//!    classify the row as unambiguous (one end) or ambiguous (several)
//! 2. **Aggregation** ([`aggregate`]): keep the maximum TL-75 per end; every
//!    end of an ambiguous row gets that row's value
//! 3. **Statistics** ([`stats`]): count/min/max/median/mean/sample stdev over
//!    the per-end maxima, for autosomal ends and for all ends
//! 4. **Coverage** ([`coverage`]): ambiguous ends and ends expected from the
//!    reference index but never observed
//!
//! ## Example
//!
//! ```rust
//! use telo_report::analysis::aggregate::EndAggregate;
//! use telo_report::analysis::resolver::EndTally;
//! use telo_report::core::types::RawMeasurementRow;
//!
//! let rows = vec![
//!     RawMeasurementRow::new("chr1p", 100.0),
//!     RawMeasurementRow::new("chr1p,chr2p", 150.0),
//!     RawMeasurementRow::new("chr2q", 90.0),
//! ];
//!
//! let aggregate = EndAggregate::from_rows(&rows);
//! assert_eq!(aggregate.get("chr1p"), Some(150));
//!
//! let tally = EndTally::from_fields(rows.iter().map(|r| r.end_field.as_str()));
//! assert_eq!((tally.unambiguous, tally.total), (2, 4));
//! ```

pub mod aggregate;
pub mod coverage;
pub mod resolver;
pub mod stats;
