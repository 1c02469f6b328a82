//! Counting records per level.

use crate::types::{LevelCounts, LogRecord};

/// Counts records by their literal level string.
///
/// `"error"` and `"ERROR"` are separate keys. The total of the returned
/// counts always equals `records.len()`.
#[must_use]
pub fn count_by_level(records: &[LogRecord]) -> LevelCounts {
    let mut counts = LevelCounts::new();
    for record in records {
        counts.increment(record.level());
    }
    counts
}
