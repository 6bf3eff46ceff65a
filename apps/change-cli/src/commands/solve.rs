//! # Solve Command
//!
//! One-shot calculation: `change solve --target 41 --coins "1, 5, 10, 25"`.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  args (or config defaults)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse_target / parse_denominations ──► ApiError (exit 2)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  change_core::solve                                                     │
//! │       │                                                                 │
//! │       ├── Computed    ──► print breakdown (exit 0)                      │
//! │       └── Unreachable ──► print message   (exit 1)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use change_core::validation::{parse_denominations, parse_target};
use change_core::{solve, Amount, ChangeOutcome, Denominations};
use serde::Serialize;
use std::io::Write;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{info, warn};

use crate::cli::SolveArgs;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::render::{render_breakdown, UNREACHABLE_MESSAGE};

/// Raw inputs, exactly as typed.
#[derive(Debug, Clone)]
pub struct SolveRequest {
    pub target: String,
    pub coins: String,
}

impl SolveRequest {
    /// Fills missing arguments from configuration.
    pub fn from_args(args: &SolveArgs, config: &AppConfig) -> Self {
        SolveRequest {
            target: args
                .target
                .clone()
                .unwrap_or_else(|| config.default_target.to_string()),
            coins: args
                .coins
                .clone()
                .unwrap_or_else(|| config.default_coins.clone()),
        }
    }
}

/// Result of a one-shot calculation.
///
/// ```json
/// {
///   "target": 41,
///   "denominations": [1, 5, 10, 25],
///   "rejected": [],
///   "outcome": { "status": "computed", "coins": { "1": 1, "5": 1, "10": 1, "25": 1 } },
///   "totalCoins": 4
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResponse {
    pub target: Amount,
    pub denominations: Denominations,
    pub rejected: Vec<String>,
    pub outcome: ChangeOutcome,
    pub total_coins: Option<u64>,
}

/// Validates the request and runs the solver.
pub fn solve_change(request: &SolveRequest, config: &AppConfig) -> Result<SolveResponse, ApiError> {
    let target = parse_target(&request.target, config.max_target)?;
    let parsed = parse_denominations(&request.coins)?;

    if !parsed.rejected.is_empty() {
        warn!(rejected = ?parsed.rejected, "ignoring unreadable coin values");
    }

    let started = Instant::now();
    let outcome = solve(&parsed.denominations, target);
    let total_coins = outcome.total_coins();

    info!(
        amount = target,
        coins = %parsed.denominations,
        reachable = outcome.is_reachable(),
        total_coins = ?total_coins,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "change computed"
    );

    Ok(SolveResponse {
        target,
        denominations: parsed.denominations,
        rejected: parsed.rejected,
        outcome,
        total_coins,
    })
}

/// Runs the command and writes the result to `out`.
///
/// Exit code 0 when change was found, 1 when the target is unreachable.
pub fn run<W: Write>(
    args: &SolveArgs,
    config: &AppConfig,
    json: bool,
    out: &mut W,
) -> Result<ExitCode, ApiError> {
    let request = SolveRequest::from_args(args, config);
    let response = solve_change(&request, config)?;

    if json {
        let body = serde_json::to_string_pretty(&response)
            .map_err(|e| ApiError::from(std::io::Error::from(e)))?;
        writeln!(out, "{body}")?;
    } else {
        match &response.outcome {
            ChangeOutcome::Computed(breakdown) => writeln!(out, "{}", render_breakdown(breakdown))?,
            ChangeOutcome::Unreachable => writeln!(out, "{UNREACHABLE_MESSAGE}")?,
        }
    }

    Ok(if response.outcome.is_reachable() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn request(target: &str, coins: &str) -> SolveRequest {
        SolveRequest {
            target: target.to_string(),
            coins: coins.to_string(),
        }
    }

    #[test]
    fn test_solve_change_reachable() {
        let response = solve_change(&request("41", "1, 5, 10, 25"), &AppConfig::default()).unwrap();
        assert_eq!(response.target, 41);
        assert_eq!(response.total_coins, Some(4));
        assert!(response.rejected.is_empty());
    }

    #[test]
    fn test_solve_change_reports_rejected_tokens() {
        let response = solve_change(&request("6", "3, x, 0"), &AppConfig::default()).unwrap();
        assert_eq!(response.rejected, vec!["x", "0"]);
        assert_eq!(response.total_coins, Some(2));
    }

    #[test]
    fn test_solve_change_validation_errors() {
        let err = solve_change(&request("0", "1"), &AppConfig::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.field.as_deref(), Some("target"));

        let err = solve_change(&request("5", "nope"), &AppConfig::default()).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("coins"));
    }

    #[test]
    fn test_defaults_fill_missing_args() {
        let args = SolveArgs {
            target: None,
            coins: Some("1".to_string()),
        };
        let request = SolveRequest::from_args(&args, &AppConfig::default());
        assert_eq!(request.target, "123456");
        assert_eq!(request.coins, "1");
    }

    #[test]
    fn test_run_text_output() {
        let args = SolveArgs {
            target: Some("41".to_string()),
            coins: Some("1, 5, 10, 25".to_string()),
        };
        let mut out = Vec::new();
        run(&args, &AppConfig::default(), false, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Minimum coins: 4"));
        assert!(text.contains("  25 x 1"));
    }

    #[test]
    fn test_run_json_output_unreachable() {
        let args = SolveArgs {
            target: Some("5".to_string()),
            coins: Some("3, 7".to_string()),
        };
        let mut out = Vec::new();
        run(&args, &AppConfig::default(), true, &mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["outcome"], serde_json::json!({ "status": "unreachable" }));
        assert_eq!(json["totalCoins"], serde_json::Value::Null);
        assert_eq!(json["denominations"], serde_json::json!([3, 7]));
    }
}
