use crate::input::Conversion;
use crate::output::{ConversionFormatter, PLACEHOLDER, RenderOptions};
use crate::utils::error::DaxieError;

pub struct TextFormatter {
    options: RenderOptions,
}

impl TextFormatter {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl ConversionFormatter for TextFormatter {
    fn format(&self, conversion: &Conversion) -> Result<Option<String>, DaxieError> {
        let body = match conversion.text.as_deref() {
            Some(text) => text,
            None if self.options.quiet => return Ok(None),
            None => PLACEHOLDER,
        };

        if self.options.show_input {
            Ok(Some(format!("{}\t{}", conversion.input, body)))
        } else {
            Ok(Some(body.to_string()))
        }
    }

    fn format_rejection(&self, input: &str, error: &DaxieError) -> Result<String, DaxieError> {
        if self.options.show_input {
            Ok(format!("{}\t{}", input, error))
        } else {
            Ok(error.to_string())
        }
    }
}
