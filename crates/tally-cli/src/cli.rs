//! Command-line argument parsing with clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Counts log records per severity level and lists the records of one level.
#[derive(Parser, Debug, Clone)]
#[command(name = "logtally")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the log file.
    ///
    /// Optional here so that a missing path produces the usage text and
    /// exit code 1 rather than a clap error.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Severity level to list in detail (case-insensitive).
    #[arg(value_name = "LEVEL", env = "LOGTALLY_LEVEL")]
    pub level: Option<String>,

    /// Further positional arguments are accepted and ignored.
    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Output format.
    #[arg(short, long, value_enum, env = "LOGTALLY_FORMAT", default_value_t = Format::Table)]
    pub format: Format,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Format {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output for scripting.
    Json,
}
