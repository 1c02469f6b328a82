//! CLI error types.
//!
//! Every variant ends the run with exit code 1. The `Display` text is the
//! operator-facing message printed to stderr.

use std::io;

use tally_logs::LogError;
use thiserror::Error;

/// Usage text shown when no log file is given.
pub const USAGE: &str = "Використання: logtally <шлях_до_файлу> [рівень_логування]\n\
                         Приклад: logtally logfile.log\n\
                         Приклад з фільтром: logtally logfile.log error";

/// Message for a run that loaded no valid records.
pub const NO_LOGS: &str = "Логи не завантажено або файл порожній.";

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// No log file path was given.
    #[error("{}", USAGE)]
    Usage,

    /// The file was read but held no valid records.
    #[error("{}", NO_LOGS)]
    NoRecords,

    /// The log file could not be read.
    #[error("{}\n{}", source_message(.0), NO_LOGS)]
    Source(LogError),

    /// Output formatting error.
    #[error("format error: {0}")]
    Format(String),

    /// IO error while writing the report.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Operator-facing text for each kind of source failure.
fn source_message(err: &LogError) -> String {
    match err {
        LogError::SourceNotFound(path) => {
            format!("Помилка: Файл '{}' не знайдено.", path.display())
        }
        LogError::PermissionDenied(path) => {
            format!(
                "Помилка: Недостатньо прав для читання файлу '{}'.",
                path.display()
            )
        }
        LogError::Read { source, .. } => format!("Помилка при читанні файлу: {source}"),
        LogError::MalformedLine { .. } => format!("Помилка при парсингу рядка: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn usage_mentions_arguments() {
        let text = CliError::Usage.to_string();
        assert!(text.starts_with("Використання: logtally <шлях_до_файлу> [рівень_логування]"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn no_records_message() {
        assert_eq!(CliError::NoRecords.to_string(), NO_LOGS);
    }

    #[test]
    fn source_not_found_message() {
        let err = CliError::Source(LogError::SourceNotFound(PathBuf::from("missing.log")));
        assert_eq!(
            err.to_string(),
            format!("Помилка: Файл 'missing.log' не знайдено.\n{NO_LOGS}")
        );
    }

    #[test]
    fn source_permission_message() {
        let err = CliError::Source(LogError::PermissionDenied(PathBuf::from("root.log")));
        assert!(err.to_string().contains("Недостатньо прав для читання файлу 'root.log'"));
    }

    #[test]
    fn source_read_message() {
        let err = CliError::Source(LogError::Read {
            path: PathBuf::from("bin.log"),
            source: io::Error::new(io::ErrorKind::InvalidData, "invalid utf-8"),
        });
        assert!(err.to_string().starts_with("Помилка при читанні файлу: invalid utf-8"));
    }

    #[test]
    fn cli_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let cli_err = CliError::from(io_err);
        assert!(matches!(cli_err, CliError::Io(_)));
    }
}
