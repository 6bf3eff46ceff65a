//! # Interactive Command
//!
//! A line-oriented version of the entry form.
//!
//! ```text
//! > target 41
//! Target: 41
//! > coins 1, 5, 10, 25
//! Coins: 1, 5, 10, 25
//! > calc
//! Minimum coins: 4
//!   1 x 1
//!   5 x 1
//!   10 x 1
//!   25 x 1
//! > quit
//! ```

use change_core::Amount;
use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::render::render_view;
use crate::state::ChangeForm;

const PROMPT: &str = "> ";

const HELP: &str = "\
Commands:
  target <amount>   set the amount to make change for
  coins <list>      set the coins, comma separated (e.g. 1, 5, 10, 25)
  calc              compute the minimum number of coins
  show              show the current inputs and result
  help              show this message
  quit              leave";

/// Runs the session until `quit` or end of input.
pub fn run_session<R, W>(form: &mut ChangeForm, input: R, output: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Type 'help' for commands.")?;
    show(form, output)?;

    write!(output, "{PROMPT}")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let (command, rest) = split_command(&line);
        debug!(command, "session command");

        match command {
            "" => {}
            "target" => {
                form.set_target(rest);
                writeln!(output, "Target: {}", form.target_input())?;
            }
            "coins" => {
                form.set_coins(rest);
                writeln!(output, "Coins: {}", join(&form.coin_preview()))?;
            }
            "calc" => {
                form.submit();
                print_errors(form, output)?;
                writeln!(output, "{}", render_view(form.view()))?;
            }
            "show" => show(form, output)?,
            "help" => writeln!(output, "{HELP}")?,
            "quit" | "exit" => return Ok(()),
            other => writeln!(output, "Unknown command: {other} (type 'help')")?,
        }

        write!(output, "{PROMPT}")?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(())
}

fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    }
}

fn show<W: Write>(form: &ChangeForm, output: &mut W) -> io::Result<()> {
    writeln!(output, "Target: {}", form.target_input())?;
    writeln!(output, "Coins: {}", join(&form.coin_preview()))?;
    print_errors(form, output)?;
    writeln!(output, "{}", render_view(form.view()))
}

fn print_errors<W: Write>(form: &ChangeForm, output: &mut W) -> io::Result<()> {
    for err in [form.target_error(), form.coins_error()].into_iter().flatten() {
        writeln!(output, "Error: {err}")?;
    }
    Ok(())
}

fn join(values: &[Amount]) -> String {
    values
        .iter()
        .map(Amount::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
