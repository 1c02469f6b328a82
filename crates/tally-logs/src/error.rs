//! Error types for log loading and parsing.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or parsing logs.
#[derive(Debug, Error)]
pub enum LogError {
    /// A line did not contain date, time, level and message fields.
    #[error("malformed log line: expected 4 fields, found {fields}")]
    MalformedLine {
        /// Number of whitespace-separated fields actually present (at most 3).
        fields: usize,
    },

    /// The log file does not exist.
    #[error("log file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// The log file exists but cannot be read by this process.
    #[error("permission denied reading log file: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// Any other failure while opening or reading the log file.
    #[error("failed to read log file {}: {source}", path.display())]
    Read {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl LogError {
    /// Classifies an I/O error raised while reading `path`.
    #[must_use]
    pub fn from_io(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => Self::SourceNotFound(path),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _ => Self::Read { path, source: err },
        }
    }

    /// Returns true if this error concerns the backing source rather than a single line.
    #[must_use]
    pub const fn is_source_error(&self) -> bool {
        !matches!(self, Self::MalformedLine { .. })
    }
}

/// Result type alias for log operations.
pub type Result<T> = std::result::Result<T, LogError>;
