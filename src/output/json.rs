use crate::input::Conversion;
use crate::output::ConversionFormatter;
use crate::utils::error::DaxieError;
use serde::Serialize;

/// One JSON object per line.
pub struct JsonFormatter;

#[derive(Serialize)]
struct Rejection<'a> {
    input: &'a str,
    error: String,
}

impl ConversionFormatter for JsonFormatter {
    fn format(&self, conversion: &Conversion) -> Result<Option<String>, DaxieError> {
        Ok(Some(serde_json::to_string(conversion)?))
    }

    fn format_rejection(&self, input: &str, error: &DaxieError) -> Result<String, DaxieError> {
        let rejection = Rejection {
            input,
            error: error.to_string(),
        };
        Ok(serde_json::to_string(&rejection)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::convert;
    use crate::numeral::Formatter;

    #[test]
    fn test_conversion_fields() {
        let conversion = convert("10,000", &Formatter::default()).unwrap();
        let line = JsonFormatter.format(&conversion).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["input"], "10,000");
        assert_eq!(value["digits"], "10000");
        assert_eq!(value["value"], 10000);
        assert_eq!(value["text"], "壹万");
    }

    #[test]
    fn test_empty_conversion_is_null() {
        let conversion = convert("", &Formatter::default()).unwrap();
        let line = JsonFormatter.format(&conversion).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert!(value["value"].is_null());
        assert!(value["text"].is_null());
    }

    #[test]
    fn test_rejection() {
        let err = DaxieError::out_of_range("1000000000000");
        let line = JsonFormatter.format_rejection("1000000000000", &err).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["input"], "1000000000000");
        assert!(value["error"].as_str().unwrap().contains("999,999,999,999"));
    }
}
