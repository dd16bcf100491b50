//! # daxie
//!
//! daxie converts non-negative integers into Chinese capital numerals, the
//! character set written on checks and contracts (零壹贰叁肆伍陆柒捌玖 with
//! the units 拾/佰/仟 and 万/亿).
//!
//! ## Architecture
//!
//! - [`numeral`] - the pure formatter: glyph tables, 4-digit section
//!   formatting, zero cleanup and grouping-unit assembly
//! - [`input`] - sanitization (non-digits are dropped) and the range check
//!   that guards the formatter's domain
//! - [`output`] - text and JSON rendering of conversions
//! - [`session`] - a run over a stream of inputs with per-outcome counts
//! - [`cli`] - argument parsing and hierarchical configuration
//!
//! Configuration follows hierarchical precedence:
//! 1. User config (~/.config/daxie/config.toml)
//! 2. Current directory (daxie.toml)
//! 3. Explicit --config path
//! 4. Environment variables (DAXIE_*)
//! 5. CLI flags (highest precedence)
//!
//! The library entry point is [`numeral::format`]:
//!
//! ```
//! assert_eq!(daxie::numeral::format(1000).unwrap(), "壹仟");
//! assert!(daxie::numeral::format(1_000_000_000_000).is_err());
//! ```

pub mod cli;
pub mod input;
pub mod numeral;
pub mod output;
pub mod session;
pub mod utils;

use anyhow::{Context, Result};
use numeral::{Formatter, ZeroGap};
use output::{OutputFormat, RenderOptions, get_formatter};
use session::{RunSummary, Session};
use std::io::{BufRead, Write};

/// Final resolved configuration after merging all sources (CLI, env, config files).
#[derive(Debug, Clone, Default)]
pub struct MergedConfig {
    /// Raw numbers given on the command line
    pub numbers: Vec<String>,
    /// Zero policy between non-zero sections
    pub zero_gap: ZeroGap,
    /// Output encoding
    pub format: OutputFormat,
    /// Print the raw input next to each result
    pub show_input: bool,
    /// Prompt for numbers interactively
    pub interactive: bool,
    /// Verbosity level (0-3)
    pub verbose: u8,
    /// Quiet mode (suppress non-essential output)
    pub quiet: bool,
}

/// Initialize the tracing subscriber.
///
/// `DAXIE_LOG` takes precedence over the verbosity flags. Logs go to stderr.
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    let filter = EnvFilter::try_from_env("DAXIE_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run with the process's stdin, stdout and stderr.
pub fn run(config: MergedConfig) -> Result<RunSummary> {
    run_with(
        config,
        std::io::stdin().lock(),
        std::io::stdout().lock(),
        std::io::stderr(),
    )
}

/// Run over the configured input source, writing results to `out` and
/// rejections to `err`.
///
/// Inputs come from `config.numbers` when any were given, otherwise from the
/// interactive prompt (`config.interactive`), otherwise one per line of
/// `input`.
pub fn run_with<R, O, E>(config: MergedConfig, input: R, out: O, err: E) -> Result<RunSummary>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    tracing::info!("daxie v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!(
        "Configuration: zero_gap={}, format={}, show_input={}, interactive={}, inputs={}",
        config.zero_gap,
        config.format.as_str(),
        config.show_input,
        config.interactive,
        config.numbers.len()
    );

    let options = RenderOptions {
        show_input: config.show_input,
        quiet: config.quiet,
    };
    let mut session = Session::new(
        Formatter::new(config.zero_gap),
        get_formatter(config.format, options),
        config.format,
        out,
        err,
    );

    if !config.numbers.is_empty() {
        for raw in &config.numbers {
            session.process(raw)?;
        }
    } else if config.interactive {
        utils::prompt::prompt_loop(input, |raw| {
            session.process(raw)?;
            session.flush()
        })
        .context("Interactive session failed")?;
    } else {
        utils::prompt::read_lines(input, |raw| session.process(raw))
            .context("Failed to read numbers from stdin")?;
    }

    session.flush()?;
    let summary = session.summary();
    tracing::info!(
        converted = summary.converted,
        empty = summary.empty,
        rejected = summary.rejected,
        "Run complete"
    );

    utils::summary::display_run_summary(&summary, config.verbose, config.quiet)?;
    Ok(summary)
}
