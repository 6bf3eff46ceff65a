//! # Validation Module
//!
//! Turns raw form text into solver input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Input Pipeline                                     │
//! │                                                                         │
//! │  "5, 10, abc, 25"            "41"                                       │
//! │        │                       │                                        │
//! │        ▼                       ▼                                        │
//! │  parse_denominations()     parse_target()     ◄── THIS MODULE           │
//! │  ├── split on ','          ├── blank?     → Required                    │
//! │  ├── trim tokens           ├── not int?   → InvalidFormat               │
//! │  ├── drop unparsable       ├── < 1?       → MustBePositive              │
//! │  └── none left? → error    └── > max?     → OutOfRange                  │
//! │        │                       │                                        │
//! │        ▼                       ▼                                        │
//! │  Denominations             Amount  ──────────►  solver::solve()         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bad coin tokens are dropped, not fatal: `"5, abc, 10"` is the set
//! `[5, 10]` with `"abc"` reported back in [`ParsedDenominations::rejected`].
//!
//! ## Usage
//! ```rust
//! use change_core::validation::{parse_denominations, parse_target};
//!
//! let parsed = parse_denominations("5, 10, abc, 25").unwrap();
//! assert_eq!(parsed.denominations.as_slice(), &[5, 10, 25]);
//! assert_eq!(parsed.rejected, vec!["abc".to_string()]);
//!
//! assert_eq!(parse_target("41", 1000).unwrap(), 41);
//! assert!(parse_target("0", 1000).is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::{Amount, Denominations};

const COINS_FIELD: &str = "coins";
const TARGET_FIELD: &str = "target";

// =============================================================================
// Denominations
// =============================================================================

/// Result of parsing a comma-separated coin list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDenominations {
    /// Usable coins, in the order they were written.
    pub denominations: Denominations,
    /// Tokens that were dropped (trimmed, as written).
    pub rejected: Vec<String>,
}

/// Parses a comma-separated list of coin values.
///
/// ## Rules
/// - Tokens are split on `,` and trimmed; blank tokens are ignored
/// - A token is kept only if it is a whole number greater than zero
/// - Anything else (`abc`, `-5`, `0`, `2.5`) is collected in `rejected`
/// - Fails if nothing usable remains
///
/// ## Example
/// ```rust
/// use change_core::validation::parse_denominations;
///
/// assert!(parse_denominations("1, 5, 10").is_ok());
/// assert!(parse_denominations("").is_err());
/// assert!(parse_denominations("abc, 0").is_err());
/// ```
pub fn parse_denominations(text: &str) -> ValidationResult<ParsedDenominations> {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();

    for token in tokens(text) {
        match parse_coin(token) {
            Some(coin) => accepted.push(coin),
            None => rejected.push(token.to_string()),
        }
    }

    if accepted.is_empty() {
        if rejected.is_empty() {
            return Err(ValidationError::Required {
                field: COINS_FIELD.to_string(),
            });
        }
        return Err(ValidationError::NoValidValues {
            field: COINS_FIELD.to_string(),
        });
    }

    Ok(ParsedDenominations {
        denominations: Denominations::new(accepted)?,
        rejected,
    })
}

/// Coins that would be accepted from `text`, without failing.
///
/// Used for the live preview under the coin field while the user types.
pub fn preview_denominations(text: &str) -> Vec<Amount> {
    tokens(text).filter_map(parse_coin).collect()
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(',').map(str::trim).filter(|token| !token.is_empty())
}

fn parse_coin(token: &str) -> Option<Amount> {
    token.parse::<Amount>().ok().filter(|&coin| coin > 0)
}

// =============================================================================
// Target
// =============================================================================

/// Parses the target amount from text.
///
/// ## Rules
/// - Must not be blank
/// - Must be a whole number (`12.5` and `abc` are rejected)
/// - Must be at least 1 and at most `max`
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  User types target: "0"                                                 │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  parse_target("0", max) ← THIS FUNCTION                                 │
/// │       │                                                                 │
/// │       ├── blank?        → "target is required"                          │
/// │       ├── "12.5"?       → "target has invalid format: ..."              │
/// │       ├── < 1?          → "target must be positive"                     │
/// │       ├── > max?        → "target must be between 1 and max"            │
/// │       │                                                                 │
/// │       └── OK → solver runs                                              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn parse_target(text: &str, max: Amount) -> ValidationResult<Amount> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: TARGET_FIELD.to_string(),
        });
    }

    match text.parse::<i64>() {
        Ok(value) => validate_target(value, max),
        Err(_) if is_integer_literal(text) => {
            // Digits only, but too long for i64
            if text.starts_with('-') {
                Err(ValidationError::MustBePositive {
                    field: TARGET_FIELD.to_string(),
                })
            } else {
                Err(out_of_range(max))
            }
        }
        Err(_) => Err(ValidationError::InvalidFormat {
            field: TARGET_FIELD.to_string(),
            reason: "must be a whole number".to_string(),
        }),
    }
}

/// Validates a numeric target.
///
/// ## Example
/// ```rust
/// use change_core::validation::validate_target;
///
/// assert_eq!(validate_target(123456, 10_000_000).unwrap(), 123456);
/// assert!(validate_target(0, 100).is_err());
/// assert!(validate_target(-3, 100).is_err());
/// assert!(validate_target(101, 100).is_err());
/// ```
pub fn validate_target(value: i64, max: Amount) -> ValidationResult<Amount> {
    if value < 1 {
        return Err(ValidationError::MustBePositive {
            field: TARGET_FIELD.to_string(),
        });
    }

    let amount = Amount::try_from(value).map_err(|_| out_of_range(max))?;
    if amount > max {
        return Err(out_of_range(max));
    }

    Ok(amount)
}

fn out_of_range(max: Amount) -> ValidationError {
    ValidationError::OutOfRange {
        field: TARGET_FIELD.to_string(),
        min: 1,
        max: i64::from(max),
    }
}

fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

// =============================================================================
// Unit Tests
// =============================================================================
