//! Parser for telomere-length tables (`tlens_by_allele.tsv`).
//!
//! Tab-separated with a header row. The end label lives in `#chr` (or `chr`)
//! and the TL-75 value in `TL_p75`; all other columns are ignored.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::core::types::RawMeasurementRow;
use crate::parsing::{open_input, ParseError, ParseWarning};

/// Preferred end column
pub const END_COLUMN: &str = "#chr";

/// End column used when `#chr` is absent
pub const END_COLUMN_FALLBACK: &str = "chr";

pub const VALUE_COLUMN: &str = "TL_p75";

/// Measurement rows that parsed, and warnings for the ones that did not
#[derive(Debug, Clone, Default)]
pub struct MeasurementTable {
    pub rows: Vec<RawMeasurementRow>,
    pub warnings: Vec<ParseWarning>,
}

fn table_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader)
}

fn format_error(source: &Path, err: &csv::Error) -> ParseError {
    ParseError::InvalidFormat {
        path: source.to_path_buf(),
        message: err.to_string(),
    }
}

fn find_column(
    headers: &csv::StringRecord,
    names: &[&str],
    source: &Path,
) -> Result<usize, ParseError> {
    names
        .iter()
        .find_map(|name| headers.iter().position(|h| h == *name))
        .ok_or_else(|| ParseError::MissingColumn {
            path: source.to_path_buf(),
            column: names[0].to_string(),
        })
}

/// Read only the end labels of a table file
///
/// # Errors
///
/// Returns `ParseError::MissingFile` if the file does not exist,
/// `ParseError::MissingColumn` if neither `#chr` nor `chr` is present, or
/// `ParseError::InvalidFormat` if the table cannot be read.
pub fn read_end_fields(path: &Path) -> Result<Vec<String>, ParseError> {
    let fields = read_end_fields_from(open_input(path)?, path)?;
    debug!("{}: {} rows", path.display(), fields.len());
    Ok(fields)
}

/// Read the end labels from any reader; `source` names it in errors
///
/// # Errors
///
/// See [`read_end_fields`].
pub fn read_end_fields_from<R: Read>(reader: R, source: &Path) -> Result<Vec<String>, ParseError> {
    let mut reader = table_reader(reader);
    let headers = reader
        .headers()
        .map_err(|e| format_error(source, &e))?
        .clone();
    let end_idx = find_column(&headers, &[END_COLUMN, END_COLUMN_FALLBACK], source)?;

    let mut fields = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| format_error(source, &e))?;
        fields.push(record.get(end_idx).unwrap_or_default().to_string());
    }
    Ok(fields)
}

/// Read end labels and TL-75 values from a table file
///
/// # Errors
///
/// Returns `ParseError::MissingFile` if the file does not exist,
/// `ParseError::MissingColumn` if the end column or `TL_p75` is absent, or
/// `ParseError::InvalidFormat` if the table cannot be read. Rows whose value
/// is not a finite number are skipped with a warning.
pub fn read_measurements(path: &Path) -> Result<MeasurementTable, ParseError> {
    let table = read_measurements_from(open_input(path)?, path)?;
    debug!(
        "{}: {} rows, {} skipped",
        path.display(),
        table.rows.len(),
        table.warnings.len()
    );
    Ok(table)
}

/// Read end labels and TL-75 values from any reader; `source` names it in errors
///
/// # Errors
///
/// See [`read_measurements`].
pub fn read_measurements_from<R: Read>(
    reader: R,
    source: &Path,
) -> Result<MeasurementTable, ParseError> {
    let mut reader = table_reader(reader);
    let headers = reader
        .headers()
        .map_err(|e| format_error(source, &e))?
        .clone();
    let end_idx = find_column(&headers, &[END_COLUMN, END_COLUMN_FALLBACK], source)?;
    let value_idx = find_column(&headers, &[VALUE_COLUMN], source)?;

    let mut table = MeasurementTable::default();
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(|e| format_error(source, &e))?;
        // Header is line 1
        let line = record
            .position()
            .map_or(i + 2, |p| usize::try_from(p.line()).unwrap_or(i + 2));

        let raw = record.get(value_idx).unwrap_or_default().trim();
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => {
                let end_field = record.get(end_idx).unwrap_or_default();
                table.rows.push(RawMeasurementRow::new(end_field, value));
            }
            _ => table.warnings.push(ParseWarning::new(
                line,
                format!("Invalid {VALUE_COLUMN} value '{raw}'. Skipping row."),
            )),
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> &'static Path {
        Path::new("tlens_by_allele.tsv")
    }

    #[test]
    fn test_read_measurements() {
        let tsv = "#chr\tposition\tTL_p75\n\
                   chr1p\t100\t100\n\
                   chr1p,chr2p\t200\t150.7\n\
                   chr2q\t300\t90\n";

        let table = read_measurements_from(tsv.as_bytes(), source()).unwrap();
        assert!(table.warnings.is_empty());
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[1].end_field, "chr1p,chr2p");
        assert!((table.rows[1].value - 150.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_values_warn() {
        let tsv = "#chr\tTL_p75\n\
                   chr1p\t100\n\
                   chr2p\tnot_a_number\n\
                   chr3p\t\n\
                   chr4p\tinf\n\
                   chr5p\n\
                   chr6p\t60\n";

        let table = read_measurements_from(tsv.as_bytes(), source()).unwrap();
        let ends: Vec<&str> = table.rows.iter().map(|r| r.end_field.as_str()).collect();
        assert_eq!(ends, vec!["chr1p", "chr6p"]);

        let lines: Vec<usize> = table.warnings.iter().map(|w| w.line).collect();
        assert_eq!(lines, vec![3, 4, 5, 6]);
        assert!(table.warnings[0].message.contains("not_a_number"));
    }

    #[test]
    fn test_chr_fallback_column() {
        let tsv = "chr\tTL_p75\nchrXq\t4000\n";
        let table = read_measurements_from(tsv.as_bytes(), source()).unwrap();
        assert_eq!(table.rows[0].end_field, "chrXq");
    }

    #[test]
    fn test_missing_value_column() {
        let tsv = "#chr\tTL_p50\nchr1p\t100\n";
        let err = read_measurements_from(tsv.as_bytes(), source()).unwrap_err();
        match err {
            ParseError::MissingColumn { column, .. } => assert_eq!(column, "TL_p75"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_end_column() {
        let tsv = "contig\tTL_p75\nchr1p\t100\n";
        let err = read_end_fields_from(tsv.as_bytes(), source()).unwrap_err();
        match err {
            ParseError::MissingColumn { column, .. } => assert_eq!(column, "#chr"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_read_end_fields_ignores_values() {
        let tsv = "#chr\tTL_p75\nchr1p\tbad\nchr2p,chr3p\t\n";
        let fields = read_end_fields_from(tsv.as_bytes(), source()).unwrap();
        assert_eq!(fields, vec!["chr1p", "chr2p,chr3p"]);
    }

    #[test]
    fn test_empty_table_is_schema_error() {
        let err = read_end_fields_from("".as_bytes(), source()).unwrap_err();
        assert!(matches!(err, ParseError::MissingColumn { .. }));
    }
}
