use anyhow::Result;
use daxie::utils::error::{DaxieError, format_error};
use daxie::{cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Try to determine verbose mode early for better error formatting
    // Default to false for early errors (before config is parsed)
    let verbose = std::env::args().any(|arg| arg == "-v" || arg.starts_with("-vv"));

    match run_main() {
        Ok(code) => code,
        Err(e) => {
            display_error(&e, verbose);
            ExitCode::FAILURE
        }
    }
}

/// Display an error with contextual formatting.
///
/// Tries to downcast to `DaxieError` for rich formatting, falls back to
/// anyhow's error chain display for other errors.
fn display_error(error: &anyhow::Error, verbose: bool) {
    if let Some(daxie_error) = error.downcast_ref::<DaxieError>() {
        eprintln!("{}", format_error(daxie_error, verbose));
        return;
    }

    eprintln!("\n\u{26a0} Error: {}", error);

    // Display the full error chain
    let causes: Vec<_> = error.chain().skip(1).collect();
    if !causes.is_empty() {
        eprintln!("\nCaused by:");
        for (i, cause) in causes.iter().enumerate() {
            let prefix = if i == causes.len() - 1 {
                "\u{2514}\u{2500}"
            } else {
                "\u{251c}\u{2500}"
            };
            eprintln!("{} {}", prefix, cause);
        }
    }

    if verbose {
        let backtrace = error.backtrace();
        if backtrace.status() == std::backtrace::BacktraceStatus::Captured {
            eprintln!("\nBacktrace:\n{}", backtrace);
        }
    }
}

fn run_main() -> Result<ExitCode> {
    // Parse CLI arguments (includes env vars)
    let args = cli::args::parse();

    // Initialize logging before config discovery so its debug output is visible
    daxie::init_logging(args.verbose, args.quiet);

    // Load config from files + env vars (already merged)
    let config = cli::config::load(&args)?;

    // CLI args override config files only when explicitly provided
    let merged_config = cli::config::merge_config(&args, config)?;

    let summary = run(merged_config)?;
    Ok(ExitCode::from(summary.exit_status()))
}
