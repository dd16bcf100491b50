//! Capital numeral formatting.
//!
//! Converts an integer in `0..=999_999_999_999` into the formal Chinese
//! numerals used on checks and contracts (壹贰叁...). The value is split into
//! 4-digit sections, each section is spelled with the positional units
//! 仟/佰/拾, and non-zero sections are joined with the grouping units 万/亿.
//!
//! ```
//! use daxie::numeral::{Formatter, ZeroGap, format};
//!
//! assert_eq!(format(108).unwrap(), "壹佰零捌");
//! assert_eq!(format(100_000_001).unwrap(), "壹亿零壹");
//!
//! let literal = Formatter::new(ZeroGap::Literal);
//! assert_eq!(literal.format(100_000_001).unwrap(), "壹亿壹");
//! ```

pub mod section;
pub mod tables;

pub use section::{clean_zeros, format_section};
pub use tables::{DIGITS, GROUP_UNITS, MAX_VALUE, POSITION_UNITS, SECTION_MAX, ZERO};

use crate::utils::error::DaxieError;
use tables::SECTION_BASE;

/// Sections below this value start with a zero thousands digit.
const FULL_SECTION: u16 = 1000;

/// How a zero between two non-zero sections is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ZeroGap {
    /// Emit a single 零 when a lower section follows a skipped all-zero
    /// section or has a zero thousands digit (`100000001` → `壹亿零壹`).
    /// The second case also changes adjacent sections: `10001` is written
    /// `壹万零壹`, where the literal policy gives `壹万壹`.
    #[default]
    Conventional,
    /// Join sections with no separating zero (`100000001` → `壹亿壹`).
    Literal,
}

impl ZeroGap {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZeroGap::Conventional => "conventional",
            ZeroGap::Literal => "literal",
        }
    }
}

impl std::fmt::Display for ZeroGap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ZeroGap {
    type Err = DaxieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conventional" => Ok(ZeroGap::Conventional),
            "literal" => Ok(ZeroGap::Literal),
            other => Err(DaxieError::invalid_zero_gap(other)),
        }
    }
}

/// Stateless capital numeral formatter.
///
/// Only the [`ZeroGap`] policy varies between instances; all glyph tables
/// are constants, so a `Formatter` can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formatter {
    zero_gap: ZeroGap,
}

impl Formatter {
    pub fn new(zero_gap: ZeroGap) -> Self {
        Self { zero_gap }
    }

    pub fn zero_gap(&self) -> ZeroGap {
        self.zero_gap
    }

    /// Format `value` as capital numerals.
    ///
    /// Returns [`DaxieError::OutOfRange`] when `value` exceeds [`MAX_VALUE`].
    pub fn format(&self, value: u64) -> Result<String, DaxieError> {
        if value > MAX_VALUE {
            return Err(DaxieError::out_of_range(value));
        }
        if value == 0 {
            return Ok(ZERO.to_string());
        }

        let sections = groups(value);
        let mut text = String::with_capacity(sections.len() * 8 * 3);
        let mut skipped = false;

        for (index, &section) in sections.iter().enumerate().rev() {
            if section == 0 {
                skipped = !text.is_empty();
                continue;
            }

            if self.zero_gap == ZeroGap::Conventional
                && !text.is_empty()
                && (skipped || section < FULL_SECTION)
            {
                text.push(ZERO);
            }

            text.push_str(&format_section(section)?);
            text.push_str(GROUP_UNITS.get(index).copied().unwrap_or_default());
            skipped = false;
        }

        tracing::trace!(value, zero_gap = %self.zero_gap, %text, "formatted");
        Ok(text)
    }
}

/// Format `value` with the conventional zero-gap policy.
pub fn format(value: u64) -> Result<String, DaxieError> {
    Formatter::default().format(value)
}

/// Split `value` into base-10000 sections, least significant first.
///
/// Zero yields a single zero section.
pub fn groups(value: u64) -> Vec<u16> {
    let mut sections = Vec::with_capacity(GROUP_UNITS.len());
    let mut rest = value;
    loop {
        sections.push((rest % SECTION_BASE) as u16);
        rest /= SECTION_BASE;
        if rest == 0 {
            break;
        }
    }
    sections
}
