//! A run over a stream of raw inputs.
//!
//! The session owns the formatter and the output encoding, converts one raw
//! input at a time, and keeps counts for the end-of-run summary. Rejected
//! inputs are reported and counted; they do not stop the run.

use crate::input::convert;
use crate::numeral::Formatter;
use crate::output::{ConversionFormatter, OutputFormat};
use anyhow::{Context, Result};
use console::style;
use std::io::Write;

/// Exit status when every input converted or was empty.
pub const EXIT_OK: u8 = 0;

/// Exit status when at least one input was out of range.
pub const EXIT_REJECTED: u8 = 2;

/// Counts collected over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Inputs that produced numeral text.
    pub converted: usize,
    /// Inputs with no digits.
    pub empty: usize,
    /// Inputs rejected by the range check.
    pub rejected: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.converted + self.empty + self.rejected
    }

    pub fn has_rejections(&self) -> bool {
        self.rejected > 0
    }

    /// Process exit status for this run.
    pub fn exit_status(&self) -> u8 {
        if self.has_rejections() {
            EXIT_REJECTED
        } else {
            EXIT_OK
        }
    }
}

pub struct Session<O: Write, E: Write> {
    formatter: Formatter,
    renderer: Box<dyn ConversionFormatter>,
    format: OutputFormat,
    out: O,
    err: E,
    summary: RunSummary,
}

impl<O: Write, E: Write> Session<O, E> {
    pub fn new(
        formatter: Formatter,
        renderer: Box<dyn ConversionFormatter>,
        format: OutputFormat,
        out: O,
        err: E,
    ) -> Self {
        Self {
            formatter,
            renderer,
            format,
            out,
            err,
            summary: RunSummary::default(),
        }
    }

    /// Convert and render one raw input.
    ///
    /// Only write failures and serialization failures are returned as errors.
    pub fn process(&mut self, raw: &str) -> Result<()> {
        match convert(raw, &self.formatter) {
            Ok(conversion) => {
                if conversion.is_empty() {
                    self.summary.empty += 1;
                } else {
                    self.summary.converted += 1;
                }
                if let Some(line) = self.renderer.format(&conversion)? {
                    writeln!(self.out, "{}", line).context("Failed to write output")?;
                }
            }
            Err(error) if error.is_input_error() => {
                tracing::debug!(input = raw, "rejected: {}", error);
                self.summary.rejected += 1;
                let line = self.renderer.format_rejection(raw, &error)?;
                match self.format {
                    // Keep one JSON record per input on stdout.
                    OutputFormat::Json => {
                        writeln!(self.out, "{}", line).context("Failed to write output")?;
                    }
                    OutputFormat::Text => {
                        writeln!(self.err, "{}", style(line).red())
                            .context("Failed to write error output")?;
                    }
                }
            }
            Err(error) => return Err(error.into()),
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush().context("Failed to flush output")?;
        self.err.flush().context("Failed to flush error output")
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Consume the session, returning its writers.
    pub fn into_parts(self) -> (O, E, RunSummary) {
        (self.out, self.err, self.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeral::ZeroGap;
    use crate::output::{RenderOptions, get_formatter};

    fn session(format: OutputFormat, zero_gap: ZeroGap) -> Session<Vec<u8>, Vec<u8>> {
        Session::new(
            Formatter::new(zero_gap),
            get_formatter(format, RenderOptions::default()),
            format,
            Vec::new(),
            Vec::new(),
        )
    }

    #[test]
    fn test_counts_each_outcome() {
        let mut session = session(OutputFormat::Text, ZeroGap::Conventional);
        for raw in ["5", "", "1000000000000", "10,000"] {
            session.process(raw).unwrap();
        }
        let (out, err, summary) = session.into_parts();

        assert_eq!(summary.converted, 2);
        assert_eq!(summary.empty, 1);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.total(), 4);

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().collect::<Vec<_>>(), ["伍", "等待输入...", "壹万"]);
        assert!(String::from_utf8(err).unwrap().contains("数字超出范围"));
    }

    #[test]
    fn test_json_rejections_go_to_stdout() {
        let mut session = session(OutputFormat::Json, ZeroGap::Literal);
        session.process("100000001").unwrap();
        session.process("9999999999999").unwrap();
        let (out, err, summary) = session.into_parts();

        assert!(summary.has_rejections());
        assert_eq!(summary.exit_status(), EXIT_REJECTED);
        assert!(err.is_empty());
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"text\":\"壹亿壹\""));
        assert!(lines[1].contains("\"error\""));
    }
}
