//! Interactive prompt loop.

use anyhow::{Context, Result};
use console::Term;
use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;
use std::io::BufRead;

/// Words that end an interactive session.
const EXIT_COMMANDS: [&str; 3] = ["q", "quit", "exit"];

pub fn is_exit_command(line: &str) -> bool {
    let line = line.trim();
    EXIT_COMMANDS
        .iter()
        .any(|command| line.eq_ignore_ascii_case(command))
}

/// Prompt for numbers until the user exits, passing each line to `on_input`.
///
/// Falls back to reading `fallback` line by line when stderr is not a
/// terminal.
pub fn prompt_loop<R, F>(fallback: R, mut on_input: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(&str) -> Result<()>,
{
    let term = Term::stderr();
    if !term.is_term() {
        tracing::debug!("Not a terminal, reading inputs line by line");
        return read_lines(fallback, on_input);
    }

    let theme = ColorfulTheme::default();
    loop {
        let line: String = Input::with_theme(&theme)
            .with_prompt("数字")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read interactive input")?;

        if is_exit_command(&line) {
            break;
        }
        on_input(&line)?;
    }

    Ok(())
}

/// Feed every line of `reader` to `on_input`.
pub fn read_lines<R, F>(reader: R, mut on_input: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(&str) -> Result<()>,
{
    for line in reader.lines() {
        let line = line.context("Failed to read input line")?;
        on_input(&line)?;
    }
    Ok(())
}
