//! # change-core: Pure Coin-Change Logic
//!
//! Computes the fewest coins from a given set that sum exactly to a target,
//! and which coins those are. Everything here is a pure function with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Change Maker Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Callers (change-cli, web form via ts-rs types)       │   │
//! │  │      target text ──► coin text ──► submit ──► result view       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ change-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐   ┌────────────┐   ┌────────────────────┐     │   │
//! │  │   │ validation │──►│   solver   │──►│       types        │     │   │
//! │  │   │ parse text │   │ DP tables  │   │ ChangeOutcome etc. │     │   │
//! │  │   └────────────┘   └────────────┘   └────────────────────┘     │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Denominations`, `Breakdown`, `ChangeOutcome`
//! - [`solver`] - The dynamic program
//! - [`validation`] - Turning raw text into solver input
//! - [`error`] - Validation error types
//!
//! ## Example Usage
//!
//! ```rust
//! use change_core::validation::{parse_denominations, parse_target};
//! use change_core::{solve, MAX_TARGET};
//!
//! let parsed = parse_denominations("1, 5, 10, 25").unwrap();
//! let target = parse_target("41", MAX_TARGET).unwrap();
//!
//! let outcome = solve(&parsed.denominations, target);
//! assert_eq!(outcome.total_coins(), Some(4));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod solver;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ValidationError, ValidationResult};
pub use solver::{solve, ChangeTable};
pub use types::{Amount, Breakdown, ChangeOutcome, Denominations};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest target accepted by default validation.
///
/// The solver allocates two tables of `target + 1` entries and touches each
/// entry once per coin, so callers cap the target before solving.
/// Front ends may choose a different cap.
pub const MAX_TARGET: Amount = 10_000_000;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_types_are_thread_safe() {
        assert_send_sync::<Denominations>();
        assert_send_sync::<ChangeTable>();
        assert_send_sync::<ChangeOutcome>();
        assert_send_sync::<ValidationError>();
    }

    #[test]
    fn test_parallel_solves_agree() {
        let coins = Denominations::new(vec![1, 3, 4, 10]).unwrap();
        let expected: Vec<ChangeOutcome> = (0..50).map(|t| solve(&coins, t)).collect();

        thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| (0..50).map(|t| solve(&coins, t)).collect::<Vec<_>>()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
