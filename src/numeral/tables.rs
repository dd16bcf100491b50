//! Glyph tables for the capital numeral system.

/// The zero glyph.
pub const ZERO: char = '零';

/// Capital glyphs indexed by digit value.
pub const DIGITS: [char; 10] = ['零', '壹', '贰', '叁', '肆', '伍', '陆', '柒', '捌', '玖'];

/// Positional units inside a 4-digit section, most significant first.
/// The ones position carries no unit.
pub const POSITION_UNITS: [&str; 4] = ["仟", "佰", "拾", ""];

/// Grouping units indexed by section, least significant first.
///
/// `万亿` is unreachable while [`MAX_VALUE`] stays at twelve digits.
pub const GROUP_UNITS: [&str; 4] = ["", "万", "亿", "万亿"];

/// Largest value accepted by the formatter.
pub const MAX_VALUE: u64 = 999_999_999_999;

/// Base of one section.
pub const SECTION_BASE: u64 = 10_000;

/// Largest value of one 4-digit section.
pub const SECTION_MAX: u16 = 9_999;

/// Returns the capital glyph for a single decimal digit.
///
/// Callers pass `value % 10`; anything larger maps to the zero glyph.
pub(crate) fn glyph(digit: usize) -> char {
    DIGITS.get(digit).copied().unwrap_or(ZERO)
}

/// Returns true when `ch` belongs to one of the numeral tables.
pub fn is_numeral_char(ch: char) -> bool {
    DIGITS.contains(&ch)
        || POSITION_UNITS
            .iter()
            .chain(GROUP_UNITS.iter())
            .any(|unit| unit.contains(ch))
}
