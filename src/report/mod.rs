//! Text renderings of the reports and atomic report writing.
//!
//! - [`coverage`]: fixed-width chromosome-end coverage table
//! - [`summary`]: `#`-commented TSV with per-end maxima and statistics

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

pub mod coverage;
pub mod summary;

/// Default path for the coverage report
pub const DEFAULT_COVERAGE_OUTPUT: &str = "telomere_report.txt";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Write `contents` to `path` through a temporary file in the same directory,
/// so the destination only ever holds a complete report.
///
/// # Errors
///
/// Returns `ReportError::Write` if the temporary file cannot be created or
/// written, or cannot be moved over `path`.
pub fn write_report(path: &Path, contents: &str) -> Result<(), ReportError> {
    let write_error = |source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(write_error)?;
    temp.write_all(contents.as_bytes()).map_err(write_error)?;
    temp.flush().map_err(write_error)?;
    temp.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}
