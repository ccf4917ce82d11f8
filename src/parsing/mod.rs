//! Parsers for the two report inputs.
//!
//! This module provides parsers for:
//!
//! - **Reference index (.fai) files**: chromosome names and lengths, see [`fai`]
//! - **Telomere-length tables**: per-row end labels and TL-75 values, see [`tlens`]
//!
//! Either input may be gzip/bgzip compressed (`.gz` or `.bgz` suffix).
//!
//! Malformed rows are not fatal. They are skipped and reported as
//! [`ParseWarning`]s returned next to the parsed data.
//!
//! ## Example
//!
//! ```rust,no_run
//! use telo_report::parsing::fai::parse_fai_file;
//! use std::path::Path;
//!
//! let index = parse_fai_file(Path::new("genome.fa.fai")).unwrap();
//! for warning in &index.warnings {
//!     eprintln!("{warning}");
//! }
//! println!("{} chromosomes", index.catalog.len());
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use thiserror::Error;

pub mod fai;
pub mod tlens;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("File not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Column '{column}' not found in {}", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("Invalid table format in {}: {message}", path.display())]
    InvalidFormat { path: PathBuf, message: String },
}

/// A recoverable problem with one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// 1-based line number in the input
    pub line: usize,
    pub message: String,
}

impl ParseWarning {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Fail with `ParseError::MissingFile` unless `path` is an existing file
///
/// # Errors
///
/// Returns `ParseError::MissingFile` if nothing exists at `path`.
pub fn require_file(path: &Path) -> Result<(), ParseError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ParseError::MissingFile(path.to_path_buf()))
    }
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Open an input file, decompressing it when the name says so
///
/// # Errors
///
/// Returns `ParseError::MissingFile` if the file does not exist, or
/// `ParseError::Io` if it cannot be opened.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>, ParseError> {
    require_file(path)?;

    let file = File::open(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if is_gzipped(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Read a whole input file into a string
///
/// # Errors
///
/// See [`open_input`]; read failures are returned as `ParseError::Io`.
pub fn read_input(path: &Path) -> Result<String, ParseError> {
    let mut text = String::new();
    open_input(path)?
        .read_to_string(&mut text)
        .map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(text)
}
