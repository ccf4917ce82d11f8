use std::collections::BTreeSet;

use serde::Serialize;

/// How a single row's end label resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No non-empty end in the label
    Empty,
    /// Exactly one end
    Unambiguous(String),
    /// Two or more ends, in label order, duplicates kept
    Ambiguous(Vec<String>),
}

impl Resolution {
    pub fn ends(&self) -> &[String] {
        match self {
            Self::Empty => &[],
            Self::Unambiguous(end) => std::slice::from_ref(end),
            Self::Ambiguous(ends) => ends,
        }
    }
}

/// Split a comma-joined end label into atomic end identifiers
pub fn split_ends(end_field: &str) -> Vec<String> {
    end_field
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn resolve(end_field: &str) -> Resolution {
    let mut ends = split_ends(end_field);
    match ends.len() {
        0 => Resolution::Empty,
        1 => Resolution::Unambiguous(ends.remove(0)),
        _ => Resolution::Ambiguous(ends),
    }
}

/// Running counts of resolved rows.
///
/// `total` counts end occurrences (parts per row), while `unambiguous` counts
/// whole rows with a single end. An end seen in any multi-end row stays in
/// `ambiguous` even if it also appears alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EndTally {
    pub unambiguous: usize,
    pub total: usize,
    pub ambiguous: BTreeSet<String>,
    pub found: BTreeSet<String>,
}

impl EndTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tally = Self::new();
        for field in fields {
            tally.observe(field.as_ref());
        }
        tally
    }

    /// Resolve one row's label and fold it into the counts
    pub fn observe(&mut self, end_field: &str) -> Resolution {
        let resolution = resolve(end_field);

        let ends = resolution.ends();
        self.total += ends.len();
        match &resolution {
            Resolution::Empty => {}
            Resolution::Unambiguous(_) => self.unambiguous += 1,
            Resolution::Ambiguous(_) => self.ambiguous.extend(ends.iter().cloned()),
        }
        self.found.extend(ends.iter().cloned());

        resolution
    }
}
