//! # Domain Types
//!
//! Core types shared by the solver and its callers.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │  Denominations  │   │    Breakdown    │   │   ChangeOutcome     │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  Vec<Amount>    │   │  coin → count   │   │  Computed(Breakdown)│   │
//! │  │  non-empty      │   │  counts > 0     │   │  Unreachable        │   │
//! │  │  all > 0        │   │  ascending keys │   │                     │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use ts_rs::TS;

use crate::error::{ValidationError, ValidationResult};

/// A coin value or a target, in the smallest unit the caller works with.
pub type Amount = u32;

// =============================================================================
// Denominations
// =============================================================================

/// The coins available to make change with, each reusable without limit.
///
/// ## Invariants
/// - At least one entry
/// - Every entry is strictly positive
///
/// Input order is preserved: when several minimal answers exist, the solver
/// prefers coins that appear earlier. Duplicates are kept and are harmless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Denominations(Vec<Amount>);

impl Denominations {
    /// Creates a denomination set, rejecting empty input and zero coins.
    ///
    /// ## Example
    /// ```rust
    /// use change_core::Denominations;
    ///
    /// let coins = Denominations::new(vec![25, 10, 5, 1]).unwrap();
    /// assert_eq!(coins.len(), 4);
    ///
    /// assert!(Denominations::new(vec![]).is_err());
    /// assert!(Denominations::new(vec![5, 0]).is_err());
    /// ```
    pub fn new(values: Vec<Amount>) -> ValidationResult<Self> {
        if values.is_empty() {
            return Err(ValidationError::Required {
                field: "coins".to_string(),
            });
        }

        if values.contains(&0) {
            return Err(ValidationError::MustBePositive {
                field: "coins".to_string(),
            });
        }

        Ok(Denominations(values))
    }

    /// Iterates coins in input order.
    pub fn iter(&self) -> impl Iterator<Item = Amount> + '_ {
        self.0.iter().copied()
    }

    /// Coins in input order.
    #[inline]
    pub fn as_slice(&self) -> &[Amount] {
        &self.0
    }

    /// Number of entries, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for parity with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<Amount>> for Denominations {
    type Error = ValidationError;

    fn try_from(values: Vec<Amount>) -> ValidationResult<Self> {
        Denominations::new(values)
    }
}

impl fmt::Display for Denominations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coin) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{coin}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Breakdown
// =============================================================================

/// How many of each coin make up an amount.
///
/// Keys are denominations in ascending order; every count is at least 1.
/// An empty breakdown means zero coins (the answer for a target of 0).
///
/// Serializes as a plain JSON object: `{"5": 1, "10": 1, "25": 1}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Breakdown(BTreeMap<Amount, u32>);

impl Breakdown {
    /// Creates an empty breakdown (zero coins).
    pub fn new() -> Self {
        Breakdown(BTreeMap::new())
    }

    /// Adds one coin of the given denomination.
    pub(crate) fn add_coin(&mut self, denomination: Amount) {
        *self.0.entry(denomination).or_insert(0) += 1;
    }

    /// How many coins of `denomination` are used (0 if none).
    pub fn count_of(&self, denomination: Amount) -> u32 {
        self.0.get(&denomination).copied().unwrap_or(0)
    }

    /// Total number of coins.
    ///
    /// ## Example
    /// ```rust
    /// use change_core::{solve, Denominations};
    ///
    /// let coins = Denominations::new(vec![1, 5, 10, 25]).unwrap();
    /// let outcome = solve(&coins, 41);
    /// assert_eq!(outcome.breakdown().unwrap().total_coins(), 4);
    /// ```
    pub fn total_coins(&self) -> u64 {
        self.0.values().map(|&count| u64::from(count)).sum()
    }

    /// Sum of `denomination × count`, i.e. the amount this breakdown pays.
    pub fn total_value(&self) -> u64 {
        self.0
            .iter()
            .map(|(&coin, &count)| u64::from(coin) * u64::from(count))
            .sum()
    }

    /// Number of distinct denominations used.
    pub fn distinct(&self) -> usize {
        self.0.len()
    }

    /// True when no coins are used.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(denomination, count)` pairs in ascending denomination order.
    pub fn iter(&self) -> impl Iterator<Item = (Amount, u32)> + '_ {
        self.0.iter().map(|(&coin, &count)| (coin, count))
    }
}

/// Rebuilds a breakdown from raw counts, rejecting zero coins and zero counts.
impl TryFrom<BTreeMap<Amount, u32>> for Breakdown {
    type Error = ValidationError;

    fn try_from(counts: BTreeMap<Amount, u32>) -> ValidationResult<Self> {
        if counts.contains_key(&0) {
            return Err(ValidationError::MustBePositive {
                field: "coins".to_string(),
            });
        }

        if counts.values().any(|&count| count == 0) {
            return Err(ValidationError::MustBePositive {
                field: "count".to_string(),
            });
        }

        Ok(Breakdown(counts))
    }
}

impl<'de> Deserialize<'de> for Breakdown {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let counts = BTreeMap::<Amount, u32>::deserialize(deserializer)?;
        Breakdown::try_from(counts).map_err(de::Error::custom)
    }
}

/// Formats as `5 x 1, 10 x 1, 25 x 1`.
impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (coin, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{coin} x {count}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Change Outcome
// =============================================================================

/// What the solver found for one target.
///
/// ## Why a Tagged Outcome?
/// "This amount cannot be made" is an ordinary answer, so it is a variant,
/// not an error and not a special key inside the map. Callers match on the
/// variant instead of inspecting the breakdown's shape.
///
/// ## Serialization
/// ```json
/// { "status": "computed", "coins": { "5": 1, "10": 1 } }
/// { "status": "unreachable" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "status", content = "coins", rename_all = "snake_case")]
pub enum ChangeOutcome {
    /// A minimum-size set of coins summing exactly to the target.
    Computed(Breakdown),
    /// No combination of the available coins sums to the target.
    Unreachable,
}

impl ChangeOutcome {
    /// True for `Computed`.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        matches!(self, ChangeOutcome::Computed(_))
    }

    /// The breakdown, if the target was reachable.
    pub fn breakdown(&self) -> Option<&Breakdown> {
        match self {
            ChangeOutcome::Computed(breakdown) => Some(breakdown),
            ChangeOutcome::Unreachable => None,
        }
    }

    /// Minimum number of coins, if reachable.
    pub fn total_coins(&self) -> Option<u64> {
        self.breakdown().map(Breakdown::total_coins)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denominations_rejects_empty_and_zero() {
        assert_eq!(
            Denominations::new(vec![]),
            Err(ValidationError::Required {
                field: "coins".to_string()
            })
        );
        assert_eq!(
            Denominations::new(vec![1, 0, 5]),
            Err(ValidationError::MustBePositive {
                field: "coins".to_string()
            })
        );
    }

    #[test]
    fn test_denominations_keep_order_and_duplicates() {
        let coins = Denominations::try_from(vec![10, 1, 10]).unwrap();
        assert_eq!(coins.as_slice(), &[10, 1, 10]);
        assert_eq!(coins.to_string(), "10, 1, 10");
    }

    #[test]
    fn test_breakdown_totals() {
        let mut breakdown = Breakdown::new();
        breakdown.add_coin(25);
        breakdown.add_coin(25);
        breakdown.add_coin(1);

        assert_eq!(breakdown.count_of(25), 2);
        assert_eq!(breakdown.count_of(10), 0);
        assert_eq!(breakdown.total_coins(), 3);
        assert_eq!(breakdown.total_value(), 51);
        assert_eq!(breakdown.distinct(), 2);
        assert_eq!(breakdown.to_string(), "1 x 1, 25 x 2");
    }

    #[test]
    fn test_outcome_accessors() {
        let unreachable = ChangeOutcome::Unreachable;
        assert!(!unreachable.is_reachable());
        assert_eq!(unreachable.total_coins(), None);

        let empty = ChangeOutcome::Computed(Breakdown::new());
        assert!(empty.is_reachable());
        assert_eq!(empty.total_coins(), Some(0));
    }

    #[test]
    fn test_outcome_json_shape() {
        let mut breakdown = Breakdown::new();
        breakdown.add_coin(10);
        breakdown.add_coin(5);

        let json = serde_json::to_value(ChangeOutcome::Computed(breakdown)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "status": "computed", "coins": { "5": 1, "10": 1 } })
        );

        let json = serde_json::to_value(ChangeOutcome::Unreachable).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "unreachable" }));
    }

    #[test]
    fn test_outcome_json_parses_back() {
        let parsed: ChangeOutcome =
            serde_json::from_str(r#"{"status":"computed","coins":{"25":2}}"#).unwrap();
        assert_eq!(parsed.breakdown().map(|b| b.count_of(25)), Some(2));
    }

    #[test]
    fn test_outcome_json_rejects_zero_counts_and_coins() {
        let zero_counts =
            serde_json::from_str::<ChangeOutcome>(r#"{"status":"computed","coins":{"0":0,"25":0}}"#);
        assert!(zero_counts.is_err());

        let zero_count = serde_json::from_str::<Breakdown>(r#"{"25":0}"#);
        assert!(zero_count.is_err());

        let zero_coin = serde_json::from_str::<Breakdown>(r#"{"0":3}"#);
        assert!(zero_coin.is_err());
    }

    #[test]
    fn test_breakdown_try_from_counts() {
        let counts = BTreeMap::from([(5, 2), (10, 1)]);
        let breakdown = Breakdown::try_from(counts).unwrap();
        assert_eq!(breakdown.total_value(), 20);

        assert_eq!(
            Breakdown::try_from(BTreeMap::from([(5, 0)])),
            Err(ValidationError::MustBePositive {
                field: "count".to_string()
            })
        );
    }
}
