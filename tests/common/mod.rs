//! Common test utilities and fixtures for integration tests.

#![allow(dead_code)]

use daxie::numeral::ZERO;
use daxie::numeral::tables::is_numeral_char;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a temporary directory for test fixtures.
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Writes a config file into `dir` and returns its path.
pub fn write_config(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write config file");
    path
}

/// Values whose sections hit every zero-placement pattern.
pub const SECTION_SAMPLES: [u64; 12] = [0, 1, 9, 10, 11, 100, 101, 110, 1000, 1001, 1010, 9999];

/// Every combination of three sample sections, as full values.
pub fn structured_values() -> Vec<u64> {
    let mut values = Vec::with_capacity(SECTION_SAMPLES.len().pow(3));
    for high in SECTION_SAMPLES {
        for mid in SECTION_SAMPLES {
            for low in SECTION_SAMPLES {
                values.push(high * 100_000_000 + mid * 10_000 + low);
            }
        }
    }
    values
}

/// Asserts the invariants every formatted value must satisfy.
pub fn assert_well_formed(value: u64, text: &str) {
    assert!(!text.is_empty(), "{value}: empty output");
    assert_eq!(text == "零", value == 0, "{value}: zero glyph iff zero");

    for ch in text.chars() {
        assert!(is_numeral_char(ch), "{value}: unexpected character {ch:?} in {text}");
    }

    if value > 0 {
        assert!(!text.starts_with(ZERO), "{value}: leading zero in {text}");
        assert!(!text.ends_with(ZERO), "{value}: trailing zero in {text}");
    }
    assert!(!text.contains("零零"), "{value}: zero run in {text}");
}

/// Number of non-zero decimal digits in `value`.
pub fn nonzero_digits(value: u64) -> usize {
    value.to_string().chars().filter(|c| *c != '0').count()
}
