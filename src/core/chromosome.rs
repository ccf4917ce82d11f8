use std::collections::HashMap;

use serde::Serialize;

use crate::core::end::arm_ends;

/// Name of the unplaced/unknown chromosome that every catalogue carries
pub const UNPLACED_CHROMOSOME: &str = "chrU";

/// A single chromosome from a reference sequence index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChromosomeRecord {
    /// Sequence name (column 1 of the index)
    pub name: String,

    /// Sequence length (column 2 of the index). `None` only for the
    /// synthesized unplaced sentinel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u64>,

    /// 1-based rank in index order
    pub rank: usize,

    /// True when the record was added by the catalogue rather than read
    #[serde(skip_serializing_if = "is_false")]
    pub synthesized: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl ChromosomeRecord {
    pub fn new(name: impl Into<String>, length: u64, rank: usize) -> Self {
        Self {
            name: name.into(),
            length: Some(length),
            rank,
            synthesized: false,
        }
    }

    fn sentinel(rank: usize) -> Self {
        Self {
            name: UNPLACED_CHROMOSOME.to_string(),
            length: None,
            rank,
            synthesized: true,
        }
    }
}

/// Ordered catalogue of chromosomes built from one reference index.
///
/// Immutable once built; construct it through [`CatalogBuilder`].
#[derive(Debug, Clone, Serialize)]
pub struct ChromosomeCatalog {
    /// Records in index order, the unplaced sentinel last when synthesized
    pub records: Vec<ChromosomeRecord>,

    /// Every name seen with at least two fields, `"chr"` removed
    pub digits: Vec<String>,

    #[serde(skip)]
    name_to_rank: HashMap<String, usize>,

    #[serde(skip)]
    name_to_length: HashMap<String, u64>,
}

impl ChromosomeCatalog {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn rank(&self, name: &str) -> Option<usize> {
        self.name_to_rank.get(name).copied()
    }

    pub fn length(&self, name: &str) -> Option<u64> {
        self.name_to_length.get(name).copied()
    }

    pub fn ranks(&self) -> &HashMap<String, usize> {
        &self.name_to_rank
    }

    pub fn lengths(&self) -> &HashMap<String, u64> {
        &self.name_to_length
    }

    /// Telomere ends implied by the index: `p` then `q` for every record read
    /// from the index, in catalogue order. The synthesized sentinel is skipped.
    pub fn expected_ends(&self) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| !r.synthesized)
            .flat_map(|r| arm_ends(&r.name))
            .collect()
    }
}

/// Accumulates index lines into a [`ChromosomeCatalog`]
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    records: Vec<ChromosomeRecord>,
    digits: Vec<String>,
    name_to_rank: HashMap<String, usize>,
    name_to_length: HashMap<String, u64>,
    next_rank: usize,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self {
            next_rank: 1,
            ..Self::default()
        }
    }

    /// Record a name for the digit list. Called for every line with a name,
    /// whether or not its length parses.
    pub fn note_name(&mut self, name: &str) {
        self.digits.push(name.replace("chr", ""));
    }

    /// Add a successfully parsed record, taking the next rank
    pub fn add_record(&mut self, name: &str, length: u64) {
        let rank = self.next_rank;
        self.name_to_rank.insert(name.to_string(), rank);
        self.name_to_length.insert(name.to_string(), length);
        self.records.push(ChromosomeRecord::new(name, length, rank));
        self.next_rank += 1;
    }

    /// Finish the catalogue, appending the unplaced sentinel when absent
    pub fn build(mut self) -> ChromosomeCatalog {
        if !self.name_to_rank.contains_key(UNPLACED_CHROMOSOME) {
            let rank = self.next_rank;
            self.name_to_rank
                .insert(UNPLACED_CHROMOSOME.to_string(), rank);
            self.records.push(ChromosomeRecord::sentinel(rank));
        }

        ChromosomeCatalog {
            records: self.records,
            digits: self.digits,
            name_to_rank: self.name_to_rank,
            name_to_length: self.name_to_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_appended_with_next_rank() {
        let mut builder = CatalogBuilder::new();
        builder.add_record("chr1", 1000);
        builder.add_record("chr2", 2000);
        let catalog = builder.build();

        assert_eq!(catalog.len(), 3);
        let last = &catalog.records[2];
        assert_eq!(last.name, UNPLACED_CHROMOSOME);
        assert_eq!(last.rank, 3);
        assert!(last.synthesized);
        assert!(last.length.is_none());
        assert_eq!(catalog.rank("chrU"), Some(3));
        assert_eq!(catalog.length("chrU"), None);
    }

    #[test]
    fn test_existing_sentinel_keeps_rank() {
        let mut builder = CatalogBuilder::new();
        builder.add_record("chrU", 500);
        builder.add_record("chr1", 1000);
        let catalog = builder.build();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.rank("chrU"), Some(1));
        assert_eq!(catalog.length("chrU"), Some(500));
    }

    #[test]
    fn test_expected_ends_skip_sentinel() {
        let mut builder = CatalogBuilder::new();
        builder.add_record("chr1", 1000);
        builder.add_record("chrX", 3000);
        let catalog = builder.build();

        assert_eq!(
            catalog.expected_ends(),
            vec!["chr1p", "chr1q", "chrXp", "chrXq"]
        );
    }

    #[test]
    fn test_digits_strip_chr() {
        let mut builder = CatalogBuilder::new();
        builder.note_name("chr1");
        builder.note_name("chrX");
        builder.note_name("scaffold_7");
        let catalog = builder.build();

        assert_eq!(catalog.digits, vec!["1", "X", "scaffold_7"]);
    }

    #[test]
    fn test_catalog_json_omits_sentinel_defaults() {
        let mut builder = CatalogBuilder::new();
        builder.note_name("chr1");
        builder.add_record("chr1", 1000);
        let value = serde_json::to_value(builder.build()).unwrap();

        let records = value["records"].as_array().unwrap();
        assert_eq!(records[0], serde_json::json!({"name": "chr1", "length": 1000, "rank": 1}));
        assert_eq!(
            records[1],
            serde_json::json!({"name": "chrU", "rank": 2, "synthesized": true})
        );
        assert_eq!(value["digits"], serde_json::json!(["1"]));
        assert!(value.get("name_to_rank").is_none());
    }
}
