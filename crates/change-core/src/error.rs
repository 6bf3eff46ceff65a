//! # Error Types
//!
//! Validation errors for change-core.
//!
//! ## Where Errors Happen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Boundary                                  │
//! │                                                                         │
//! │  raw text ──► validation ──► Denominations / Amount ──► solver          │
//! │                   │                                        │            │
//! │                   ▼                                        ▼            │
//! │            ValidationError                        ChangeOutcome         │
//! │            (bad input)                   (Computed or Unreachable,      │
//! │                                           never an error)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every variant names the offending field
//! 3. Errors are enum variants, never String
//! 4. An unreachable target is NOT an error

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while turning caller input into solver input. The solver itself
/// never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value could not be read (e.g. `12.5` where a whole number is needed).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A list field had entries, but none of them were usable.
    ///
    /// ## When This Occurs
    /// - Coin text is `"abc, -5, 0"`: every token is discarded
    ///
    /// Blank text (`""` or `" , ,"`) is `Required` instead.
    #[error("{field} must contain at least one valid value")]
    NoValidValues { field: String },
}

impl ValidationError {
    /// Returns the name of the field this error refers to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::MustBePositive { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::NoValidValues { field } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "target".to_string(),
        };
        assert_eq!(err.to_string(), "target must be positive");

        let err = ValidationError::OutOfRange {
            field: "target".to_string(),
            min: 1,
            max: 1000,
        };
        assert_eq!(err.to_string(), "target must be between 1 and 1000");

        let err = ValidationError::NoValidValues {
            field: "coins".to_string(),
        };
        assert_eq!(err.to_string(), "coins must contain at least one valid value");
    }

    #[test]
    fn test_field_accessor() {
        let err = ValidationError::InvalidFormat {
            field: "target".to_string(),
            reason: "must be a whole number".to_string(),
        };
        assert_eq!(err.field(), "target");
    }
}
