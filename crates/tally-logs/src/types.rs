//! Core types for log reports.
//!
//! This module provides:
//! - [`LogRecord`] — One parsed `<date> <time> <level> <message>` line
//! - [`LevelCounts`] — Occurrences per literal level, in sorted order

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// A successfully parsed log line.
///
/// Records are only produced by [`crate::parser::parse_line`], so every
/// record carries all four fields. Date and time are opaque tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LogRecord {
    date: String,
    time: String,
    level: String,
    message: String,
}

impl LogRecord {
    pub(crate) fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        level: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            level: level.into(),
            message: message.into(),
        }
    }

    /// The date token, exactly as written.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The time token, exactly as written.
    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }

    /// The severity level, exactly as written (not normalized).
    #[must_use]
    pub fn level(&self) -> &str {
        &self.level
    }

    /// Everything after the level, with internal whitespace preserved.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Detail-line form: `<date> <time> - <message>`.
impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {}", self.date, self.time, self.message)
    }
}

/// Record counts keyed by literal level string.
///
/// Iteration is in ascending lexicographic order of the level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LevelCounts(BTreeMap<String, usize>);

impl LevelCounts {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn increment(&mut self, level: &str) {
        if let Some(count) = self.0.get_mut(level) {
            *count += 1;
        } else {
            self.0.insert(level.to_string(), 1);
        }
    }

    /// Count for the exact level string, or zero.
    #[must_use]
    pub fn get(&self, level: &str) -> usize {
        self.0.get(level).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Number of distinct levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no level has been counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(level, count)` pairs in ascending level order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(level, count)| (level.as_str(), *count))
    }
}
