//! # Change
//!
//! Minimum-coin change calculator.
//!
//! ```text
//! change solve --target 41 --coins "1, 5, 10, 25"
//! change --json solve -t 5 -c "3, 7"
//! change interactive
//! ```

use std::process::ExitCode;

use change_cli::cli::Cli;
use clap::Parser;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    change_cli::init_tracing(cli.verbose);
    change_cli::run(cli)
}
