//! Line parsing for the `<date> <time> <level> <message...>` grammar.
//!
//! The first three fields are single whitespace-delimited tokens. The
//! message is the rest of the line, taken verbatim, so spacing inside it
//! survives parsing.

use std::str::FromStr;

use crate::error::{LogError, Result};
use crate::types::LogRecord;

/// Number of fields a well-formed line splits into.
pub const FIELD_COUNT: usize = 4;

/// Parses one raw line into a [`LogRecord`].
///
/// Leading and trailing whitespace is ignored. Splitting stops after the
/// level field; whatever follows the whitespace after it is the message.
///
/// # Errors
///
/// Returns [`LogError::MalformedLine`] when the line has fewer than
/// [`FIELD_COUNT`] fields (an empty line has zero).
pub fn parse_line(line: &str) -> Result<LogRecord> {
    let rest = line.trim();

    let Some((date, rest)) = next_field(rest) else {
        return Err(LogError::MalformedLine { fields: 0 });
    };
    let Some((time, rest)) = next_field(rest) else {
        return Err(LogError::MalformedLine { fields: 1 });
    };
    let Some((level, rest)) = next_field(rest) else {
        return Err(LogError::MalformedLine { fields: 2 });
    };

    let message = rest.trim_start();
    if message.is_empty() {
        return Err(LogError::MalformedLine { fields: 3 });
    }

    Ok(LogRecord::new(date, time, level, message))
}

/// Splits off the next whitespace-delimited token, returning it and the
/// unconsumed remainder (which still starts with the delimiter).
fn next_field(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    Some(s.split_at(end))
}

impl FromStr for LogRecord {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self> {
        parse_line(s)
    }
}
