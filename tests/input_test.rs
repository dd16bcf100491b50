//! Integration tests for the caller contract: sanitization, the empty state,
//! and the range check in front of the formatter.

use daxie::input::{Parsed, convert, parse, sanitize};
use daxie::numeral::{Formatter, MAX_VALUE, ZeroGap};
use daxie::output::{OutputFormat, RenderOptions, get_formatter};
use daxie::session::Session;
use daxie::utils::error::DaxieError;

#[test]
fn test_non_digits_are_discarded_silently() {
    assert_eq!(sanitize("RMB 1,234,567.00"), "123456700");
    let conversion = convert("壹 2 叁", &Formatter::default()).unwrap();
    assert_eq!(conversion.value, Some(2));
    assert_eq!(conversion.text.as_deref(), Some("贰"));
}

#[test]
fn test_empty_input_never_reaches_formatter() {
    for raw in ["", "   ", "abc", "¥", "--"] {
        assert_eq!(parse(raw).unwrap(), Parsed::Empty, "{raw:?}");
        assert!(convert(raw, &Formatter::default()).unwrap().is_empty());
    }
}

#[test]
fn test_range_boundary() {
    assert_eq!(parse("999999999999").unwrap(), Parsed::Value(MAX_VALUE));

    let err = convert("1,000,000,000,000", &Formatter::default()).unwrap_err();
    match err {
        DaxieError::OutOfRange { value, max } => {
            assert_eq!(value, "1000000000000");
            assert_eq!(max, MAX_VALUE);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_overlong_digit_strings_are_out_of_range() {
    let raw = "9".repeat(40);
    assert!(matches!(parse(&raw), Err(DaxieError::OutOfRange { .. })));
}

#[test]
fn test_zero_gap_policy_flows_through_convert() {
    let literal = convert("100000001", &Formatter::new(ZeroGap::Literal)).unwrap();
    let conventional = convert("100000001", &Formatter::new(ZeroGap::Conventional)).unwrap();
    assert_eq!(literal.text.as_deref(), Some("壹亿壹"));
    assert_eq!(conventional.text.as_deref(), Some("壹亿零壹"));
}

#[test]
fn test_session_text_output_with_input() {
    let options = RenderOptions {
        show_input: true,
        quiet: false,
    };
    let mut session = Session::new(
        Formatter::default(),
        get_formatter(OutputFormat::Text, options),
        OutputFormat::Text,
        Vec::new(),
        Vec::new(),
    );
    for raw in ["1,000", "", "10001"] {
        session.process(raw).unwrap();
    }
    let (out, err, summary) = session.into_parts();
    assert!(err.is_empty());
    assert_eq!(summary.converted, 2);
    assert_eq!(summary.empty, 1);

    let out = String::from_utf8(out).unwrap();
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines, ["1,000\t壹仟", "\t等待输入...", "10001\t壹万零壹"]);
}

#[test]
fn test_session_json_output() {
    let mut session = Session::new(
        Formatter::default(),
        get_formatter(OutputFormat::Json, RenderOptions::default()),
        OutputFormat::Json,
        Vec::new(),
        Vec::new(),
    );
    session.process("108").unwrap();
    let (out, _, _) = session.into_parts();

    insta::assert_snapshot!(
        String::from_utf8(out).unwrap().trim_end(),
        @r#"{"input":"108","digits":"108","value":108,"text":"壹佰零捌"}"#
    );
}
