//! # tally-cli
//!
//! `logtally` command-line interface.
//!
//! ```text
//! logtally <FILE> [LEVEL] [--format table|json]
//! ```
//!
//! Loads the file through [`tally_logs::load_file`], prints the per-level
//! count table and, when `LEVEL` is given, the records of that level.
//! Every failure maps to exit code 1 (see [`CliError`]).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod error;
pub mod output;

use std::io::Write;

use tally_logs::{count_by_level, load_file};
use tracing::debug;

pub use cli::{Cli, Format};
pub use error::CliError;
pub use output::{LevelDetail, LevelReport, OutputFormat, TableDisplay};

/// Runs one invocation, writing the report to `out`.
///
/// # Errors
///
/// Returns [`CliError::Usage`] without a file path, [`CliError::Source`]
/// when the file cannot be read, [`CliError::NoRecords`] when it holds no
/// valid record, and an I/O or format error when writing fails.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<(), CliError> {
    let Some(path) = cli.file.as_deref() else {
        return Err(CliError::Usage);
    };
    let format = OutputFormat::new(cli.format);

    if !format.is_json() {
        writeln!(out, "Завантаження логів з файлу: {}", path.display())?;
    }

    let loaded = load_file(path);
    if loaded.is_empty() {
        return Err(match loaded.source_error {
            Some(e) => CliError::Source(e),
            None => CliError::NoRecords,
        });
    }

    // An empty level means no detail listing
    let level = cli.level.as_deref().filter(|l| !l.is_empty());
    let detail = level.map(|level| LevelDetail::select(&loaded.records, level));
    debug!(
        level,
        matched = detail.as_ref().map(|d| d.records.len()),
        "building report"
    );

    let report = LevelReport {
        source: path,
        total: loaded.len(),
        malformed: loaded.malformed,
        counts: count_by_level(&loaded.records),
        detail,
    };
    format.write(out, &report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn cli(file: Option<PathBuf>, level: Option<&str>, format: Format) -> Cli {
        Cli {
            file,
            level: level.map(str::to_string),
            extra: Vec::new(),
            format,
        }
    }

    fn log_file(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file
    }

    #[test]
    fn missing_path_is_usage_error() {
        let mut out = Vec::new();
        let result = run(&cli(None, None, Format::Table), &mut out);
        assert!(matches!(result, Err(CliError::Usage)));
        assert!(out.is_empty());
    }

    #[test]
    fn missing_file_is_source_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let result = run(
            &cli(Some(dir.path().join("nope.log")), None, Format::Table),
            &mut out,
        );
        assert!(matches!(
            result,
            Err(CliError::Source(tally_logs::LogError::SourceNotFound(_)))
        ));
    }

    #[test]
    fn empty_file_is_no_records() {
        let file = log_file(&[]);
        let mut out = Vec::new();
        let result = run(&cli(Some(file.path().into()), None, Format::Table), &mut out);
        assert!(matches!(result, Err(CliError::NoRecords)));
    }

    #[test]
    fn only_malformed_lines_is_no_records() {
        let file = log_file(&["bad line", "still bad"]);
        let mut out = Vec::new();
        let result = run(&cli(Some(file.path().into()), None, Format::Table), &mut out);
        assert!(matches!(result, Err(CliError::NoRecords)));
    }

    #[test]
    fn table_report_with_level() {
        let file = log_file(&[
            "2024-01-01 10:00:00 INFO boot ok",
            "bad line",
            "2024-01-01 10:01:00 ERROR disk fail",
        ]);
        let mut out = Vec::new();
        run(
            &cli(Some(file.path().into()), Some("error"), Format::Table),
            &mut out,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Завантаження логів з файлу: "));
        assert!(text.contains("ERROR            | 1\n"));
        assert!(text.contains("INFO             | 1\n"));
        assert!(text.contains("Деталі логів для рівня 'ERROR':\n2024-01-01 10:01:00 - disk fail\n"));
    }

    #[test]
    fn empty_level_skips_detail_listing() {
        let file = log_file(&["2024-01-01 10:00:00 INFO boot ok"]);
        let mut out = Vec::new();
        run(&cli(Some(file.path().into()), Some(""), Format::Table), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("INFO             | 1\n"));
        assert!(!text.contains("Деталі логів"));
    }

    #[test]
    fn json_report_has_no_banner() {
        let file = log_file(&["2024-01-01 10:00:00 INFO boot ok"]);
        let mut out = Vec::new();
        run(&cli(Some(file.path().into()), None, Format::Json), &mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["total"], 1);
        assert_eq!(json["counts"]["INFO"], 1);
    }
}
