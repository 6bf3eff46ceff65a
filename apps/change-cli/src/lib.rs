//! # Change CLI Library
//!
//! Terminal front end for `change-core`.
//!
//! ## Module Organization
//! ```text
//! change_cli/
//! ├── lib.rs          ◄─── You are here (logging setup & dispatch)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── config.rs       ◄─── Environment configuration
//! ├── error.rs        ◄─── ApiError for command failures
//! ├── render.rs       ◄─── Text output
//! ├── state/
//! │   └── form.rs     ◄─── ChangeForm + ResultView
//! └── commands/
//!     ├── solve.rs        ◄─── One-shot calculation
//!     └── interactive.rs  ◄─── Line-oriented form session
//! ```
//!
//! ## Output Streams
//! Results go to stdout; logs go to stderr, so `change solve --json | jq`
//! stays clean.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod state;

use std::io;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use config::AppConfig;
use error::ApiError;
use state::ChangeForm;

/// Runs the parsed command line.
///
/// ## Exit Codes
/// - `0`: change found (or interactive session ended)
/// - `1`: target unreachable with the given coins, or I/O failure
/// - `2`: invalid input or configuration
pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    info!("Starting change");

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => return Ok(report(ApiError::from(err), cli.json)),
    };
    debug!(?config, "Configuration loaded");

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Solve(args) => {
            let stdout = io::stdout();
            match commands::solve::run(&args, &config, cli.json, &mut stdout.lock()) {
                Ok(code) => Ok(code),
                Err(err) => Ok(report(err, cli.json)),
            }
        }
        Command::Interactive => {
            let mut form = ChangeForm::new(&config);
            let stdin = io::stdin();
            let stdout = io::stdout();
            commands::interactive::run_session(&mut form, stdin.lock(), &mut stdout.lock())?;
            info!("Session ended");
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Prints a command error and returns its exit code.
fn report(err: ApiError, json: bool) -> ExitCode {
    error!(code = ?err.code, field = ?err.field, "{}", err.message);

    if json {
        match serde_json::to_string_pretty(&err) {
            Ok(body) => println!("{body}"),
            Err(_) => eprintln!("{err}"),
        }
    } else {
        eprintln!("Error: {err}");
    }

    err.exit_code()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG` wins when set
/// - `--verbose`: debug for the change crates
/// - Default: info
pub fn init_tracing(verbose: bool) {
    let default = if verbose {
        "change_cli=debug,change_core=debug"
    } else {
        "change_cli=info,change_core=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}
