use crate::numeral::ZeroGap;
use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// CLI argument parsing with environment variable support.
///
/// Environment variables follow the pattern `DAXIE_*` and are overridden by CLI flags.
/// Example: `DAXIE_ZERO_GAP=literal` is overridden by `--zero-gap conventional`.
#[derive(Parser, Debug)]
#[command(name = "daxie")]
#[command(about = "Convert integers into Chinese capital numerals (壹贰叁)")]
#[command(version)]
pub struct Args {
    /// Numbers to convert; non-digit characters are ignored. Reads stdin when omitted
    pub numbers: Vec<String>,

    /// How to write a zero between two non-zero 4-digit sections
    #[arg(long, value_enum, env = "DAXIE_ZERO_GAP")]
    pub zero_gap: Option<ZeroGap>,

    /// Output format
    #[arg(short, long, value_enum, env = "DAXIE_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Print the raw input next to each result
    #[arg(long, env = "DAXIE_SHOW_INPUT")]
    pub show_input: bool,

    /// Prompt for numbers interactively
    #[arg(short, long, conflicts_with = "numbers")]
    pub interactive: bool,

    /// Config file path
    #[arg(short, long, default_value = "daxie.toml", env = "DAXIE_CONFIG")]
    pub config: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short)]
    pub quiet: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
