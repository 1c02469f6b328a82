//! Extracting and summing the numbers written in free text.
//!
//! A number is a run of ASCII digits, optionally with one fractional part
//! (`1000.01`), bounded by word boundaries on both sides.

use once_cell::sync::Lazy;
use regex::{Matches, Regex};

/// Decimal numbers first so `27.45` is not split into `27` and `45`.
static NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[0-9]+\.[0-9]+\b|\b[0-9]+\b").unwrap_or_else(|_| unreachable!())
});

/// Iterator over the numbers found in a text, in order of appearance.
#[derive(Debug)]
pub struct Numbers<'h> {
    matches: Matches<'static, 'h>,
}

impl Iterator for Numbers<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        loop {
            let found = self.matches.next()?;
            if let Ok(value) = found.as_str().parse() {
                return Some(value);
            }
        }
    }
}

/// Lazily yields every number in `text`.
#[must_use]
pub fn generator_numbers(text: &str) -> Numbers<'_> {
    Numbers {
        matches: NUMBER_REGEX.find_iter(text),
    }
}

/// Sums the numbers that `extract` finds in `text`.
pub fn sum_profit<'h, F, I>(text: &'h str, extract: F) -> f64
where
    F: Fn(&'h str) -> I,
    I: Iterator<Item = f64>,
{
    extract(text).sum()
}
