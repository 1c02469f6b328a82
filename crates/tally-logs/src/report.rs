//! Text reports: the per-level count table and the level detail listing.
//!
//! Both layouts are fixed. The count table looks like:
//!
//! ```text
//! Рівень логування | Кількість
//! -----------------|----------
//! ERROR            | 1
//! INFO             | 1
//! ```

use std::borrow::Borrow;
use std::io::{self, Write};

use crate::types::{LevelCounts, LogRecord};

/// First line of the count table.
pub const COUNT_TABLE_HEADER: &str = "Рівень логування | Кількість";

/// Separator under [`COUNT_TABLE_HEADER`].
pub const COUNT_TABLE_RULE: &str = "-----------------|----------";

/// Width the level column is left-justified to.
pub const LEVEL_COLUMN_WIDTH: usize = 16;

/// Renders the count table, levels in ascending order.
#[must_use]
pub fn render_counts(counts: &LevelCounts) -> String {
    let mut out = String::new();
    out.push_str(COUNT_TABLE_HEADER);
    out.push('\n');
    out.push_str(COUNT_TABLE_RULE);
    out.push('\n');
    for (level, count) in counts.iter() {
        out.push_str(&format!("{level:<width$} | {count}\n", width = LEVEL_COLUMN_WIDTH));
    }
    out
}

/// Renders the detail listing for `level`.
///
/// A header naming the level (upper-cased) comes first, then one
/// `<date> <time> - <message>` line per record, or a single "no records"
/// line when `records` is empty.
#[must_use]
pub fn render_filtered<R: Borrow<LogRecord>>(records: &[R], level: &str) -> String {
    let level = level.to_uppercase();
    let mut out = format!("Деталі логів для рівня '{level}':\n");

    if records.is_empty() {
        out.push_str(&format!("Записів з рівнем '{level}' не знайдено.\n"));
        return out;
    }

    for record in records {
        let record: &LogRecord = record.borrow();
        out.push_str(&record.to_string());
        out.push('\n');
    }
    out
}

/// Writes [`render_counts`] output to `writer`.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_counts<W: Write>(writer: &mut W, counts: &LevelCounts) -> io::Result<()> {
    writer.write_all(render_counts(counts).as_bytes())
}

/// Writes [`render_filtered`] output to `writer`.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_filtered<W, R>(writer: &mut W, records: &[R], level: &str) -> io::Result<()>
where
    W: Write,
    R: Borrow<LogRecord>,
{
    writer.write_all(render_filtered(records, level).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::count_by_level;
    use crate::filter::by_level;
    use crate::loader::load;

    fn sample() -> Vec<LogRecord> {
        load([
            "2024-01-01 10:00:00 INFO boot ok",
            "bad line",
            "2024-01-01 10:01:00 ERROR disk fail",
        ])
        .into_records()
    }

    #[test]
    fn count_table_layout() {
        let counts = count_by_level(&sample());
        let expected = "Рівень логування | Кількість\n\
                        -----------------|----------\n\
                        ERROR            | 1\n\
                        INFO             | 1\n";
        assert_eq!(render_counts(&counts), expected);
    }

    #[test]
    fn count_table_sorts_by_literal_level() {
        let records = load([
            "d t WARNING a",
            "d t DEBUG b",
            "d t INFO c",
            "d t ERROR d",
            "d t INFO e",
        ])
        .into_records();
        let table = render_counts(&count_by_level(&records));
        let rows: Vec<&str> = table.lines().skip(2).collect();
        assert_eq!(
            rows,
            vec![
                "DEBUG            | 1",
                "ERROR            | 1",
                "INFO             | 2",
                "WARNING          | 1",
            ]
        );
    }

    #[test]
    fn long_level_overflows_column() {
        let records = load(["d t VERY_LONG_LEVEL_NAME x"]).into_records();
        let table = render_counts(&count_by_level(&records));
        assert!(table.ends_with("VERY_LONG_LEVEL_NAME | 1\n"));
    }

    #[test]
    fn empty_counts_render_header_only() {
        let table = render_counts(&LevelCounts::new());
        assert_eq!(table.lines().count(), 2);
    }

    #[test]
    fn detail_listing_for_matches() {
        let records = sample();
        let found = by_level(&records, "error");
        let expected = "Деталі логів для рівня 'ERROR':\n\
                        2024-01-01 10:01:00 - disk fail\n";
        assert_eq!(render_filtered(&found, "error"), expected);
    }

    #[test]
    fn detail_listing_without_matches() {
        let records = sample();
        let found = by_level(&records, "debug");
        let expected = "Деталі логів для рівня 'DEBUG':\n\
                        Записів з рівнем 'DEBUG' не знайдено.\n";
        assert_eq!(render_filtered(&found, "debug"), expected);
    }

    #[test]
    fn detail_listing_accepts_owned_records() {
        let records = sample();
        let text = render_filtered(&records, "all");
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn writers_match_renderers() {
        let records = sample();
        let counts = count_by_level(&records);

        let mut buf = Vec::new();
        write_counts(&mut buf, &counts).unwrap();
        write_filtered(&mut buf, &records, "info").unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, render_counts(&counts) + &render_filtered(&records, "info"));
    }
}
