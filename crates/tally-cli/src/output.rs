//! Output formatting for the report.
//!
//! Supports table (human-readable) and JSON output formats.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tally_logs::{write_counts, write_filtered, LevelCounts, LevelFilter, LogRecord};

use crate::cli::Format;
use crate::error::CliError;

/// Output formatter that handles both table and JSON output.
#[derive(Debug, Clone)]
pub struct OutputFormat {
    format: Format,
}

impl OutputFormat {
    /// Create a new output formatter.
    #[must_use]
    pub const fn new(format: Format) -> Self {
        Self { format }
    }

    /// Get the current format.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Check if JSON format is selected.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self.format, Format::Json)
    }

    /// Write a serializable value to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write<W, T>(&self, writer: &mut W, value: &T) -> Result<(), CliError>
    where
        W: Write,
        T: Serialize + TableDisplay,
    {
        match self.format {
            Format::Json => {
                serde_json::to_writer_pretty(&mut *writer, value)
                    .map_err(|e| CliError::Format(format!("JSON serialization failed: {e}")))?;
                writeln!(writer)?;
            }
            Format::Table => {
                value.write_table(writer)?;
            }
        }
        Ok(())
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::new(Format::Table)
    }
}

/// Trait for types that can be displayed as a table.
pub trait TableDisplay {
    /// Write the value as a human-readable table.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError>;
}

/// Records of one requested level.
#[derive(Debug, Clone, Serialize)]
pub struct LevelDetail<'a> {
    /// Requested level, upper-cased.
    pub level: String,
    /// Matching records in file order.
    pub records: Vec<&'a LogRecord>,
}

impl<'a> LevelDetail<'a> {
    /// Selects the records of `level` from `records`.
    #[must_use]
    pub fn select(records: &'a [LogRecord], level: &str) -> Self {
        let filter = LevelFilter::new(level);
        Self {
            level: filter.display_level().to_string(),
            records: filter.apply(records),
        }
    }
}

/// Everything printed for one log file.
#[derive(Debug, Clone, Serialize)]
pub struct LevelReport<'a> {
    /// File the records came from.
    pub source: &'a Path,
    /// Number of valid records.
    pub total: usize,
    /// Number of skipped malformed lines.
    pub malformed: usize,
    /// Records per literal level.
    pub counts: LevelCounts,
    /// Detail listing, when a level was requested.
    #[serde(flatten)]
    pub detail: Option<LevelDetail<'a>>,
}

impl TableDisplay for LevelReport<'_> {
    fn write_table<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        writeln!(writer)?;
        write_counts(writer, &self.counts)?;

        if let Some(detail) = &self.detail {
            writeln!(writer)?;
            write_filtered(writer, &detail.records, &detail.level)?;
        }
        Ok(())
    }
}
