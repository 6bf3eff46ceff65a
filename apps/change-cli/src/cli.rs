//! Command-line arguments.

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "change", about = "Minimum-coin change calculator", version, long_about = None)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results and errors as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Defaults to `interactive`
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute change once and exit
    Solve(SolveArgs),
    /// Edit the target and coins line by line
    Interactive,
}

#[derive(Debug, Clone, Args)]
pub struct SolveArgs {
    /// Amount to make change for [default: CHANGE_DEFAULT_TARGET or 123456]
    #[arg(short, long, allow_hyphen_values = true)]
    pub target: Option<String>,

    /// Comma-separated coin values [default: CHANGE_DEFAULT_COINS or "5, 10, 25, 50, 100"]
    #[arg(short, long, allow_hyphen_values = true)]
    pub coins: Option<String>,
}
