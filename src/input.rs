//! Raw input handling in front of the formatter.
//!
//! Input text is sanitized by dropping every non-digit character. What is
//! left is either empty (the caller shows a placeholder), a value inside the
//! formatter's domain, or an out-of-range error. The formatter is never
//! called outside its domain from here.

use crate::numeral::{Formatter, MAX_VALUE};
use crate::utils::error::DaxieError;
use serde::Serialize;

/// Result of parsing one raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parsed {
    /// No digits were present.
    Empty,
    /// A value in `0..=MAX_VALUE`.
    Value(u64),
}

/// One raw input and what it turned into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// The input exactly as received.
    pub input: String,
    /// The input with non-digits removed.
    pub digits: String,
    /// Parsed value, `None` for empty input.
    pub value: Option<u64>,
    /// Capital numeral text, `None` for empty input.
    pub text: Option<String>,
}

impl Conversion {
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

/// Keep only ASCII digits.
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Sanitize and range-check `raw`.
pub fn parse(raw: &str) -> Result<Parsed, DaxieError> {
    let digits = sanitize(raw);
    parse_digits(&digits)
}

fn parse_digits(digits: &str) -> Result<Parsed, DaxieError> {
    if digits.is_empty() {
        return Ok(Parsed::Empty);
    }

    // Strings longer than u64 can hold are out of range, not malformed.
    let value = digits
        .parse::<u64>()
        .map_err(|_| DaxieError::out_of_range(digits))?;

    if value > MAX_VALUE {
        return Err(DaxieError::out_of_range(value));
    }

    Ok(Parsed::Value(value))
}

/// Run one raw input through sanitization, the range check, and the formatter.
pub fn convert(raw: &str, formatter: &Formatter) -> Result<Conversion, DaxieError> {
    let digits = sanitize(raw);
    if digits.len() != raw.len() {
        tracing::debug!(input = raw, %digits, "discarded non-digit characters");
    }

    let (value, text) = match parse_digits(&digits)? {
        Parsed::Empty => (None, None),
        Parsed::Value(value) => (Some(value), Some(formatter.format(value)?)),
    };

    Ok(Conversion {
        input: raw.to_string(),
        digits,
        value,
        text,
    })
}
