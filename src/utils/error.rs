use crate::numeral::{MAX_VALUE, SECTION_MAX};
use crate::utils::formatting::format_number;
use console::style;
use std::error::Error as _;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DaxieError {
    #[error("数字超出范围，请输入 0-{} 之间的数字 (got {value})", format_number(*max))]
    OutOfRange { value: String, max: u64 },

    #[error("Output format error: {message}")]
    OutputFormat {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {message}\nSuggestion: {suggestion}")]
    ValidationError { message: String, suggestion: String },
}

impl DaxieError {
    pub fn out_of_range(value: impl ToString) -> Self {
        DaxieError::OutOfRange {
            value: value.to_string(),
            max: MAX_VALUE,
        }
    }

    pub fn section_out_of_range(section: u16) -> Self {
        DaxieError::OutOfRange {
            value: section.to_string(),
            max: u64::from(SECTION_MAX),
        }
    }

    pub fn invalid_zero_gap(policy: &str) -> Self {
        DaxieError::ValidationError {
            message: format!("Invalid zero gap policy: '{}'", policy),
            suggestion: "Valid policies are: conventional, literal".to_string(),
        }
    }

    pub fn invalid_format(format: &str) -> Self {
        DaxieError::ValidationError {
            message: format!("Invalid output format: '{}'", format),
            suggestion: "Valid formats are: text, json".to_string(),
        }
    }

    /// True for errors caused by a single bad input rather than the run
    /// as a whole.
    pub fn is_input_error(&self) -> bool {
        matches!(self, DaxieError::OutOfRange { .. })
    }
}

impl From<serde_json::Error> for DaxieError {
    fn from(err: serde_json::Error) -> Self {
        DaxieError::OutputFormat {
            message: "Failed to serialize JSON output".to_string(),
            source: Some(Box::new(err)),
        }
    }
}

/// Render an error for the terminal.
///
/// In verbose mode the `source` chain is appended below the message.
pub fn format_error(error: &DaxieError, verbose: bool) -> String {
    let mut out = format!("\n{} {}", style("\u{26a0} Error:").red().bold(), error);

    if let DaxieError::OutOfRange { .. } = error {
        out.push_str(&format!(
            "\n{} Enter at most 12 digits; non-digit characters are ignored",
            style("Hint:").yellow()
        ));
    }

    if verbose {
        let mut source = error.source();
        while let Some(cause) = source {
            out.push_str(&format!("\n\u{2514}\u{2500} {}", cause));
            source = cause.source();
        }
    }

    out
}
