// Copyright (c) 2025-2026 the daxie contributors
// SPDX-License-Identifier: Apache-2.0

//! End-of-run summary display.
//!
//! Printed to stderr so that stdout carries only conversion results.

use crate::session::RunSummary;
use crate::utils::formatting::format_number;
use anyhow::Result;
use console::{Term, style};
use std::io::Write;

/// Display counts for a finished run.
///
/// Shown in verbose mode, or whenever inputs were rejected and more than one
/// input was processed. Never shown in quiet mode.
pub fn display_run_summary(summary: &RunSummary, verbose: u8, quiet: bool) -> Result<()> {
    if !should_display(summary, verbose, quiet) {
        return Ok(());
    }

    let mut term = Term::stderr();
    write_run_summary(&mut term, summary)
}

fn should_display(summary: &RunSummary, verbose: u8, quiet: bool) -> bool {
    if quiet || summary.total() == 0 {
        return false;
    }
    verbose > 0 || (summary.has_rejections() && summary.total() > 1)
}

fn write_run_summary<W: Write>(out: &mut W, summary: &RunSummary) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}:", style("Summary").bold())?;
    writeln!(
        out,
        "{} Converted: {}",
        style("\u{251c}\u{2500}").dim(),
        style(format_number(summary.converted as u64)).green()
    )?;
    writeln!(
        out,
        "{} Empty: {}",
        style("\u{251c}\u{2500}").dim(),
        format_number(summary.empty as u64)
    )?;

    let rejected = format_number(summary.rejected as u64);
    let rejected = if summary.has_rejections() {
        style(rejected).red()
    } else {
        style(rejected)
    };
    writeln!(
        out,
        "{} Rejected: {}",
        style("\u{2514}\u{2500}").dim(),
        rejected
    )?;

    Ok(())
}
