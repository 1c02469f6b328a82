//! Loading log records from lines or files.
//!
//! [`load`] works on any sequence of lines. [`load_file`] reads a file
//! first and is the recovery point for source failures: it never returns
//! an error, only a [`LoadReport`] that may be empty and that remembers
//! why.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{LogError, Result};
use crate::parser::parse_line;
use crate::types::LogRecord;

/// Outcome of loading a log source.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Valid records, in input order.
    pub records: Vec<LogRecord>,
    /// Non-blank lines that failed to parse.
    pub malformed: usize,
    /// Lines that were empty or whitespace-only.
    pub blank: usize,
    /// Why the source could not be read, if it could not.
    pub source_error: Option<LogError>,
}

impl LoadReport {
    /// Number of valid records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no valid record was loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consumes the report, returning the records.
    #[must_use]
    pub fn into_records(self) -> Vec<LogRecord> {
        self.records
    }

    fn unavailable(err: LogError) -> Self {
        Self {
            source_error: Some(err),
            ..Self::default()
        }
    }
}

/// Parses every non-blank line, keeping the valid records in order.
///
/// Blank lines never reach the parser. Malformed lines are skipped and
/// counted.
pub fn load<I, S>(lines: I) -> LoadReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = LoadReport::default();

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            report.blank += 1;
            continue;
        }

        match parse_line(line) {
            Ok(record) => report.records.push(record),
            Err(e) => {
                debug!(line = index + 1, error = %e, "skipping malformed log line");
                report.malformed += 1;
            }
        }
    }

    info!(
        records = report.records.len(),
        malformed = report.malformed,
        blank = report.blank,
        "loaded log lines"
    );
    report
}

/// Reads all lines of the file at `path`.
///
/// The file handle is dropped before returning, on success and on error.
///
/// # Errors
///
/// Returns [`LogError::SourceNotFound`], [`LogError::PermissionDenied`] or
/// [`LogError::Read`] (which also covers content that is not UTF-8).
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| LogError::from_io(path, e))?;
    BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| LogError::from_io(path, e))
}

/// Loads records from the file at `path`.
///
/// A file that cannot be opened or read yields an empty report whose
/// `source_error` says why. The failure is only traced at `info`; reporting
/// it to the operator is left to the caller, which knows the audience.
pub fn load_file(path: &Path) -> LoadReport {
    match read_lines(path) {
        Ok(lines) => load(lines),
        Err(e) => {
            info!(path = %path.display(), error = %e, "log source unavailable");
            LoadReport::unavailable(e)
        }
    }
}
