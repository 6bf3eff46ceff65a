//! # Solver Module
//!
//! Minimum-coin change by bottom-up dynamic programming.
//!
//! ## Why Not Greedy?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  coins = [1, 3, 4], target = 6                                          │
//! │                                                                         │
//! │  Greedy (largest first):  4 + 1 + 1   = 3 coins  ❌                     │
//! │  Dynamic programming:     3 + 3       = 2 coins  ✅                     │
//! │                                                                         │
//! │  Greedy is only optimal for "canonical" coin systems. We accept any     │
//! │  set, so every amount from 1 to the target is solved in turn.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tables
//! ```text
//! amount      0   1   2   3   4   5   6
//! fewest      0   1   2   1   1   2   2      (coins = [1, 3, 4])
//! last_coin   -   1   1   3   4   4   3
//!
//! Reconstruct 6: last_coin[6] = 3 → 3: last_coin[3] = 3 → 0. Answer {3: 2}.
//! ```
//!
//! Cost is O(target × |coins|) time and O(target) space. Callers cap the
//! target before calling (see [`crate::MAX_TARGET`]).

use crate::types::{Amount, Breakdown, ChangeOutcome, Denominations};

// =============================================================================
// Change Table
// =============================================================================

/// Filled minimality and predecessor tables for every amount up to a target.
///
/// Built fresh for each request and dropped afterwards. Holding one lets a
/// caller ask about any amount in `0..=target` without re-running the
/// dynamic program.
#[derive(Debug, Clone)]
pub struct ChangeTable {
    /// `fewest[i]`: minimum coins summing to `i`, `None` if impossible.
    fewest: Vec<Option<u32>>,
    /// `last_coin[i]`: coin added last on the chosen path to `i`.
    last_coin: Vec<Option<Amount>>,
}

impl ChangeTable {
    /// Runs the dynamic program for every amount from 0 to `target`.
    ///
    /// For each amount, coins are tried in input order and a coin only
    /// replaces the current best on a strict improvement, so ties go to the
    /// coin listed first.
    pub fn build(denominations: &Denominations, target: Amount) -> Self {
        let len = target as usize + 1;
        let mut fewest: Vec<Option<u32>> = vec![None; len];
        let mut last_coin: Vec<Option<Amount>> = vec![None; len];
        fewest[0] = Some(0);

        for amount in 1..len {
            for coin in denominations.iter() {
                let coin_size = coin as usize;
                if coin_size > amount {
                    continue;
                }

                let Some(previous) = fewest[amount - coin_size] else {
                    continue;
                };

                let candidate = previous + 1;
                if fewest[amount].map_or(true, |best| candidate < best) {
                    fewest[amount] = Some(candidate);
                    last_coin[amount] = Some(coin);
                }
            }
        }

        ChangeTable { fewest, last_coin }
    }

    /// The largest amount this table covers.
    pub fn target(&self) -> Amount {
        // len is target + 1 and target came in as an Amount
        (self.fewest.len() - 1) as Amount
    }

    /// Minimum number of coins for `amount`.
    ///
    /// `None` if the amount cannot be made or lies beyond the table.
    pub fn min_coins(&self, amount: Amount) -> Option<u32> {
        self.fewest.get(amount as usize).copied().flatten()
    }

    /// Reconstructs the coins used for `amount` by following the
    /// predecessor table back to zero.
    pub fn breakdown(&self, amount: Amount) -> ChangeOutcome {
        if self.min_coins(amount).is_none() {
            return ChangeOutcome::Unreachable;
        }

        let mut breakdown = Breakdown::new();
        let mut remaining = amount as usize;
        while remaining > 0 {
            // A reachable amount always has a predecessor
            let Some(coin) = self.last_coin[remaining] else {
                return ChangeOutcome::Unreachable;
            };
            breakdown.add_coin(coin);
            remaining -= coin as usize;
        }

        ChangeOutcome::Computed(breakdown)
    }
}

// =============================================================================
// Entry Point
// =============================================================================

/// Finds a minimum-size set of coins summing exactly to `target`.
///
/// ## Example
/// ```rust
/// use change_core::{solve, ChangeOutcome, Denominations};
///
/// let coins = Denominations::new(vec![1, 5, 10, 25]).unwrap();
///
/// let outcome = solve(&coins, 41);
/// let breakdown = outcome.breakdown().unwrap();
/// assert_eq!(breakdown.count_of(25), 1);
/// assert_eq!(breakdown.count_of(10), 1);
/// assert_eq!(breakdown.count_of(5), 1);
/// assert_eq!(breakdown.count_of(1), 1);
///
/// // 3s and 7s can never make 5
/// let coins = Denominations::new(vec![3, 7]).unwrap();
/// assert_eq!(solve(&coins, 5), ChangeOutcome::Unreachable);
/// ```
///
/// ## Edge Cases
/// - `target == 0` → `Computed` with an empty breakdown
/// - Coins larger than the target are simply never used
pub fn solve(denominations: &Denominations, target: Amount) -> ChangeOutcome {
    ChangeTable::build(denominations, target).breakdown(target)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn coins(values: &[Amount]) -> Denominations {
        Denominations::new(values.to_vec()).unwrap()
    }

    /// Exhaustive search: fewest coins summing to `target`, trying every
    /// count of every coin.
    fn brute_force_min(values: &[Amount], target: Amount) -> Option<u64> {
        let Some((&first, rest)) = values.split_first() else {
            return if target == 0 { Some(0) } else { None };
        };

        let mut best: Option<u64> = None;
        let mut used: u64 = 0;
        let mut remaining = target;
        loop {
            if let Some(tail) = brute_force_min(rest, remaining) {
                let total = used + tail;
                best = Some(best.map_or(total, |b| b.min(total)));
            }
            if remaining < first {
                break;
            }
            remaining -= first;
            used += 1;
        }
        best
    }

    #[test]
    fn test_zero_target_is_empty_breakdown() {
        for set in [&[1][..], &[5, 10], &[3, 7], &[2]] {
            let outcome = solve(&coins(set), 0);
            assert_eq!(outcome, ChangeOutcome::Computed(Breakdown::new()));
        }
    }

    #[test]
    fn test_us_coins_41() {
        let outcome = solve(&coins(&[1, 5, 10, 25]), 41);
        let breakdown = outcome.breakdown().unwrap();
        assert_eq!(breakdown.to_string(), "1 x 1, 5 x 1, 10 x 1, 25 x 1");
        assert_eq!(breakdown.total_coins(), 4);
    }

    #[test]
    fn test_default_form_input_is_unreachable() {
        // 123456 is not a multiple of 5, so no mix of these coins reaches it
        let outcome = solve(&coins(&[5, 10, 25, 50, 100]), 123_456);
        assert_eq!(outcome, ChangeOutcome::Unreachable);

        let outcome = solve(&coins(&[5, 10, 25, 50, 100]), 123_455);
        let breakdown = outcome.breakdown().unwrap();
        assert_eq!(breakdown.count_of(100), 1234);
        assert_eq!(breakdown.count_of(50), 1);
        assert_eq!(breakdown.count_of(5), 1);
        assert_eq!(breakdown.total_coins(), 1236);
    }

    #[test]
    fn test_unreachable_cases() {
        assert_eq!(solve(&coins(&[3, 7]), 5), ChangeOutcome::Unreachable);
        assert_eq!(solve(&coins(&[2]), 3), ChangeOutcome::Unreachable);
        assert_eq!(solve(&coins(&[10]), 4), ChangeOutcome::Unreachable);
    }

    #[test]
    fn test_greedy_counterexample() {
        let outcome = solve(&coins(&[1, 3, 4]), 6);
        let breakdown = outcome.breakdown().unwrap();
        assert_eq!(breakdown.count_of(3), 2);
        assert_eq!(breakdown.total_coins(), 2);
    }

    #[test]
    fn test_tie_goes_to_first_listed_coin() {
        // 6 = 3 + 3 = 2 + 4 (both two coins)
        let first_three = solve(&coins(&[3, 2, 4]), 6);
        assert_eq!(first_three.breakdown().unwrap().count_of(3), 2);

        let first_two = solve(&coins(&[2, 4, 3]), 6);
        let breakdown = first_two.breakdown().unwrap();
        assert_eq!(breakdown.count_of(2), 1);
        assert_eq!(breakdown.count_of(4), 1);
    }

    #[test]
    fn test_duplicates_are_harmless() {
        let plain = solve(&coins(&[1, 5, 10, 25]), 99);
        let doubled = solve(&coins(&[1, 5, 5, 10, 25, 25]), 99);
        assert_eq!(plain, doubled);
    }

    #[test]
    fn test_coin_larger_than_target() {
        let outcome = solve(&coins(&[500, 2]), 8);
        let breakdown = outcome.breakdown().unwrap();
        assert_eq!(breakdown.count_of(2), 4);
        assert_eq!(breakdown.count_of(500), 0);
    }

    #[test]
    fn test_a_one_coin_reaches_everything() {
        let set = coins(&[7, 1, 11]);
        let table = ChangeTable::build(&set, 200);
        for amount in 0..=200 {
            assert!(table.breakdown(amount).is_reachable(), "amount {amount}");
        }
    }

    #[test]
    fn test_matches_brute_force() {
        let sets: [&[Amount]; 7] = [
            &[1, 5, 10, 25],
            &[1, 3, 4],
            &[3, 7],
            &[2],
            &[4, 6, 9],
            &[5, 10, 25, 50, 100],
            &[7, 2, 2, 13],
        ];

        for values in sets {
            let table = ChangeTable::build(&coins(values), 60);
            for amount in 0..=60 {
                let expected = brute_force_min(values, amount);
                let outcome = table.breakdown(amount);

                assert_eq!(
                    outcome.total_coins(),
                    expected,
                    "coins {values:?}, amount {amount}"
                );
                if let Some(breakdown) = outcome.breakdown() {
                    assert_eq!(breakdown.total_value(), u64::from(amount));
                    assert!(breakdown.iter().all(|(coin, count)| {
                        count > 0 && values.contains(&coin)
                    }));
                }
            }
        }
    }

    #[test]
    fn test_table_queries() {
        let table = ChangeTable::build(&coins(&[3, 7]), 20);
        assert_eq!(table.target(), 20);
        assert_eq!(table.min_coins(0), Some(0));
        assert_eq!(table.min_coins(5), None);
        assert_eq!(table.min_coins(14), Some(2));
        assert_eq!(table.min_coins(20), Some(4)); // 7 + 7 + 3 + 3
        assert_eq!(table.min_coins(21), None); // beyond the table
        assert_eq!(table.breakdown(21), ChangeOutcome::Unreachable);
    }

    #[test]
    fn test_deterministic() {
        let set = coins(&[4, 6, 9, 1]);
        let first = solve(&set, 97);
        for _ in 0..5 {
            assert_eq!(solve(&set, 97), first);
        }
    }
}
