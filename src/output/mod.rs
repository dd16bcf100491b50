//! Rendering of conversions for the terminal.

pub mod json;
pub mod text;

use crate::input::Conversion;
use crate::utils::error::DaxieError;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Placeholder shown while no digits have been entered.
pub const PLACEHOLDER: &str = "等待输入...";

/// Output encodings supported by the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = DaxieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(DaxieError::invalid_format(other)),
        }
    }
}

/// Renders one conversion, or one rejected input, as a single line.
///
/// `None` means nothing should be printed for this conversion.
pub trait ConversionFormatter {
    fn format(&self, conversion: &Conversion) -> Result<Option<String>, DaxieError>;
    fn format_rejection(&self, input: &str, error: &DaxieError) -> Result<String, DaxieError>;
}

/// Options that shape rendered output.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Prefix each numeral with the raw input.
    pub show_input: bool,
    /// Suppress the empty-input placeholder.
    pub quiet: bool,
}

pub fn get_formatter(format: OutputFormat, options: RenderOptions) -> Box<dyn ConversionFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(options)),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
