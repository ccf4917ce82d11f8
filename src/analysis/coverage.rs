use std::collections::BTreeSet;

use serde::Serialize;

use crate::analysis::resolver::EndTally;
use crate::core::chromosome::ChromosomeCatalog;
use crate::core::end::natural_sort;

/// Chromosome-end coverage of one telomere-length table against an index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageSummary {
    /// Rows that named exactly one end
    pub unambiguous: usize,

    /// End occurrences across all rows
    pub total: usize,

    /// Ends seen in any multi-end row, natural order
    pub ambiguous_ends: Vec<String>,

    /// Expected ends never seen, natural order
    pub missing_ends: Vec<String>,
}

impl CoverageSummary {
    pub fn new(catalog: &ChromosomeCatalog, tally: &EndTally) -> Self {
        let mut ambiguous_ends: Vec<String> = tally.ambiguous.iter().cloned().collect();
        natural_sort(&mut ambiguous_ends);

        let mut missing = missing_ends(&catalog.expected_ends(), &tally.found);
        natural_sort(&mut missing);

        Self {
            unambiguous: tally.unambiguous,
            total: tally.total,
            ambiguous_ends,
            missing_ends: missing,
        }
    }
}

/// Expected ends absent from `found`, in expected order
pub fn missing_ends(expected: &[String], found: &BTreeSet<String>) -> Vec<String> {
    expected
        .iter()
        .filter(|end| !found.contains(*end))
        .cloned()
        .collect()
}
