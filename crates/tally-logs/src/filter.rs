//! Case-insensitive level filtering.

use crate::types::LogRecord;

/// Selects records whose level matches a requested level, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelFilter {
    level: String,
    normalized: String,
}

impl LevelFilter {
    /// Creates a filter for `level`.
    #[must_use]
    pub fn new(level: impl Into<String>) -> Self {
        let level = level.into();
        let normalized = level.to_uppercase();
        Self { level, normalized }
    }

    /// The level as requested.
    #[must_use]
    pub fn level(&self) -> &str {
        &self.level
    }

    /// The requested level in upper case, as shown in report headers.
    #[must_use]
    pub fn display_level(&self) -> &str {
        &self.normalized
    }

    /// Checks if a record has the requested level.
    #[must_use]
    pub fn matches(&self, record: &LogRecord) -> bool {
        record.level().to_uppercase() == self.normalized
    }

    /// Returns matching records in their original order.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [LogRecord]) -> Vec<&'a LogRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Returns the records whose level equals `level`, ignoring case.
///
/// No match is an empty vector, not an error.
#[must_use]
pub fn by_level<'a>(records: &'a [LogRecord], level: &str) -> Vec<&'a LogRecord> {
    LevelFilter::new(level).apply(records)
}
