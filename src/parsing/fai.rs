//! Parser for FASTA index (.fai) files.
//!
//! Only the first two columns are used: `name\tlength\t...`. Lines with fewer
//! than two fields are skipped silently; lines whose length does not parse
//! are skipped with a warning but still contribute to the digit list.

use std::path::Path;

use tracing::debug;

use crate::core::chromosome::{CatalogBuilder, ChromosomeCatalog};
use crate::parsing::{read_input, ParseError, ParseWarning};

/// A parsed index together with the lines that had to be skipped
#[derive(Debug, Clone)]
pub struct ParsedIndex {
    pub catalog: ChromosomeCatalog,
    pub warnings: Vec<ParseWarning>,
}

/// Parse a FASTA index file into a chromosome catalogue
///
/// # Errors
///
/// Returns `ParseError::MissingFile` if the file does not exist or
/// `ParseError::Io` if it cannot be read.
pub fn parse_fai_file(path: &Path) -> Result<ParsedIndex, ParseError> {
    let text = read_input(path)?;
    let parsed = parse_fai_text(&text);
    debug!(
        "{}: {} chromosomes, {} skipped",
        path.display(),
        parsed.catalog.len(),
        parsed.warnings.len()
    );
    Ok(parsed)
}

/// Parse FAI text. Never fails; bad lengths become warnings.
pub fn parse_fai_text(text: &str) -> ParsedIndex {
    let mut builder = CatalogBuilder::new();
    let mut warnings = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let fields: Vec<&str> = line.trim().split('\t').collect();
        if fields.len() < 2 {
            continue;
        }

        let name = fields[0];
        builder.note_name(name);

        match fields[1].trim().parse::<u64>() {
            Ok(length) => builder.add_record(name, length),
            Err(_) => warnings.push(ParseWarning::new(
                i + 1,
                format!("Could not convert size for '{name}'. Skipping."),
            )),
        }
    }

    ParsedIndex {
        catalog: builder.build(),
        warnings,
    }
}
