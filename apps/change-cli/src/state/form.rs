//! # Form State
//!
//! The entry form: target text, coin text, field errors and the last result.

use change_core::validation::{parse_denominations, parse_target, preview_denominations};
use change_core::{solve, Amount, Breakdown, ChangeOutcome, ValidationError};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::AppConfig;

// =============================================================================
// Result View
// =============================================================================

/// What the result panel shows.
///
/// `Pending` exists only here: the solver never produces it. It is the state
/// before the first successful submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "coins", rename_all = "snake_case")]
pub enum ResultView {
    /// Nothing computed yet.
    #[default]
    Pending,
    /// The solver found a breakdown.
    Computed(Breakdown),
    /// The solver proved no combination exists.
    Unreachable,
}

impl From<ChangeOutcome> for ResultView {
    fn from(outcome: ChangeOutcome) -> Self {
        match outcome {
            ChangeOutcome::Computed(breakdown) => ResultView::Computed(breakdown),
            ChangeOutcome::Unreachable => ResultView::Unreachable,
        }
    }
}

// =============================================================================
// Change Form
// =============================================================================

/// Editable inputs plus the outcome of the last successful submit.
///
/// ## Submit Flow
/// ```text
/// submit()
///    │
///    ├── validate target ──► error? record it
///    ├── validate coins  ──► error? record it
///    │
///    ├── any error? → keep previous view, return false
///    │
///    └── solve → replace view, clear errors, return true
/// ```
///
/// Both fields are always validated so the user sees every problem at once.
#[derive(Debug, Clone)]
pub struct ChangeForm {
    target_input: String,
    coins_input: String,
    max_target: Amount,
    target_error: Option<ValidationError>,
    coins_error: Option<ValidationError>,
    view: ResultView,
}

impl ChangeForm {
    /// Creates a form pre-filled from configuration.
    pub fn new(config: &AppConfig) -> Self {
        ChangeForm {
            target_input: config.default_target.to_string(),
            coins_input: config.default_coins.clone(),
            max_target: config.max_target,
            target_error: None,
            coins_error: None,
            view: ResultView::Pending,
        }
    }

    pub fn set_target(&mut self, text: &str) {
        debug!(target_input = text, "target edited");
        self.target_input = text.trim().to_string();
    }

    pub fn set_coins(&mut self, text: &str) {
        debug!(coins_input = text, "coins edited");
        self.coins_input = text.trim().to_string();
    }

    pub fn target_input(&self) -> &str {
        &self.target_input
    }

    pub fn coins_input(&self) -> &str {
        &self.coins_input
    }

    /// Coins currently readable from the coin text.
    pub fn coin_preview(&self) -> Vec<Amount> {
        preview_denominations(&self.coins_input)
    }

    pub fn target_error(&self) -> Option<&ValidationError> {
        self.target_error.as_ref()
    }

    pub fn coins_error(&self) -> Option<&ValidationError> {
        self.coins_error.as_ref()
    }

    pub fn view(&self) -> &ResultView {
        &self.view
    }

    /// Validates both fields and, if both pass, solves.
    ///
    /// Returns true when a new result was computed.
    pub fn submit(&mut self) -> bool {
        let target = parse_target(&self.target_input, self.max_target);
        let coins = parse_denominations(&self.coins_input);

        self.target_error = target.as_ref().err().cloned();
        self.coins_error = coins.as_ref().err().cloned();

        let (Ok(target), Ok(coins)) = (target, coins) else {
            debug!(
                target_error = ?self.target_error,
                coins_error = ?self.coins_error,
                "submit rejected"
            );
            return false;
        };

        if !coins.rejected.is_empty() {
            warn!(rejected = ?coins.rejected, "ignoring unreadable coin values");
        }

        let started = Instant::now();
        let outcome = solve(&coins.denominations, target);
        info!(
            amount = target,
            coins = %coins.denominations,
            reachable = outcome.is_reachable(),
            total_coins = ?outcome.total_coins(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "change computed"
        );
        self.view = outcome.into();
        true
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
