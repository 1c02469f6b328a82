//! # tally-logs
//!
//! Parsing and reporting for plain-text logs written as
//! `<date> <time> <level> <message...>`.
//!
//! This crate provides:
//!
//! - [`parse_line`] — One raw line to a [`LogRecord`], or a malformed-line error
//! - [`load`] / [`load_file`] — Ordered valid records plus a [`LoadReport`] of what was skipped
//! - [`count_by_level`] — Occurrences per literal level as [`LevelCounts`]
//! - [`by_level`] / [`LevelFilter`] — Case-insensitive level selection
//! - [`render_counts`] / [`render_filtered`] — The fixed text report layouts
//!
//! ## Example
//!
//! ```rust
//! use tally_logs::{by_level, count_by_level, load, render_counts};
//!
//! let report = load([
//!     "2024-01-01 10:00:00 INFO boot ok",
//!     "bad line",
//!     "2024-01-01 10:01:00 ERROR disk fail",
//! ]);
//! assert_eq!(report.malformed, 1);
//!
//! let counts = count_by_level(&report.records);
//! assert_eq!(counts.get("ERROR"), 1);
//!
//! let errors = by_level(&report.records, "error");
//! assert_eq!(errors[0].message(), "disk fail");
//!
//! print!("{}", render_counts(&counts));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod parser;
pub mod report;
pub mod types;

// Re-export main types
pub use aggregate::count_by_level;
pub use error::{LogError, Result};
pub use filter::{by_level, LevelFilter};
pub use loader::{load, load_file, read_lines, LoadReport};
pub use parser::{parse_line, FIELD_COUNT};
pub use report::{render_counts, render_filtered, write_counts, write_filtered};
pub use types::{LevelCounts, LogRecord};
