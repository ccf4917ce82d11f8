use std::collections::BTreeMap;

use serde::Serialize;

use crate::analysis::resolver::split_ends;
use crate::core::end::is_autosomal;
use crate::core::types::RawMeasurementRow;

/// Maximum TL-75 per telomere end.
///
/// Every end named by a row receives that row's value, so ambiguous rows
/// contribute to each candidate end. Values are truncated to integers before
/// comparison. Iteration is in plain lexical order of the end identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EndAggregate {
    maxima: BTreeMap<String, i64>,
}

impl EndAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: &[RawMeasurementRow]) -> Self {
        let mut aggregate = Self::new();
        for row in rows {
            aggregate.add_row(row);
        }
        aggregate
    }

    pub fn add_row(&mut self, row: &RawMeasurementRow) {
        for end in split_ends(&row.end_field) {
            self.add(end, row.value);
        }
    }

    /// Fold one (end, value) pair into the running maximum
    #[allow(clippy::cast_possible_truncation)] // Truncation is the intent
    pub fn add(&mut self, end: impl Into<String>, value: f64) {
        let value = value.trunc() as i64;
        self.maxima
            .entry(end.into())
            .and_modify(|max| *max = (*max).max(value))
            .or_insert(value);
    }

    pub fn get(&self, end: &str) -> Option<i64> {
        self.maxima.get(end).copied()
    }

    pub fn len(&self) -> usize {
        self.maxima.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maxima.is_empty()
    }

    /// (end, maximum) pairs in lexical end order
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.maxima.iter().map(|(end, max)| (end.as_str(), *max))
    }

    pub fn values(&self) -> Vec<i64> {
        self.maxima.values().copied().collect()
    }

    /// Maxima of ends with no X/Y in their identifier
    pub fn autosomal_values(&self) -> Vec<i64> {
        self.iter()
            .filter(|(end, _)| is_autosomal(end))
            .map(|(_, max)| max)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<RawMeasurementRow> {
        vec![
            RawMeasurementRow::new("chr1p", 100.0),
            RawMeasurementRow::new("chr1p,chr2p", 150.0),
            RawMeasurementRow::new("chr2q", 90.0),
        ]
    }

    #[test]
    fn test_max_per_end() {
        let aggregate = EndAggregate::from_rows(&rows());

        assert_eq!(aggregate.len(), 3);
        assert_eq!(aggregate.get("chr1p"), Some(150));
        assert_eq!(aggregate.get("chr2p"), Some(150));
        assert_eq!(aggregate.get("chr2q"), Some(90));
    }

    #[test]
    fn test_order_independent() {
        let mut reversed = rows();
        reversed.reverse();
        let mut rotated = rows();
        rotated.rotate_left(1);

        let expected = EndAggregate::from_rows(&rows());
        assert_eq!(EndAggregate::from_rows(&reversed), expected);
        assert_eq!(EndAggregate::from_rows(&rotated), expected);
    }

    #[test]
    fn test_values_truncated() {
        let mut aggregate = EndAggregate::new();
        aggregate.add("chr3q", 99.9);
        aggregate.add("chr3q", 99.2);
        assert_eq!(aggregate.get("chr3q"), Some(99));

        aggregate.add("chr4q", -0.5);
        assert_eq!(aggregate.get("chr4q"), Some(0));
    }

    #[test]
    fn test_lexical_iteration() {
        let mut aggregate = EndAggregate::new();
        aggregate.add("chr2p", 1.0);
        aggregate.add("chr10p", 2.0);
        aggregate.add("chr1q", 3.0);

        let ends: Vec<&str> = aggregate.iter().map(|(end, _)| end).collect();
        assert_eq!(ends, vec!["chr10p", "chr1q", "chr2p"]);
    }

    #[test]
    fn test_autosomal_values() {
        let mut aggregate = EndAggregate::new();
        aggregate.add("chr1p", 10.0);
        aggregate.add("chrXp", 20.0);
        aggregate.add("chrYq", 30.0);

        assert_eq!(aggregate.values(), vec![10, 20, 30]);
        assert_eq!(aggregate.autosomal_values(), vec![10]);
    }
}
