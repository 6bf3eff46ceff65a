//! # API Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ValidationError (change-core) ──┐                                      │
//! │  ConfigError (config.rs) ────────┼──► ApiError { code, message }        │
//! │  io::Error (stdout closed) ──────┘          │                           │
//! │                                             ├── --json: stdout JSON     │
//! │                                             └── text:   stderr line     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An unreachable target is not an error and never becomes an `ApiError`.

use change_core::ValidationError;
use serde::Serialize;
use std::io;
use std::process::ExitCode;

use crate::config::ConfigError;

/// Error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "target must be positive",
///   "field": "target"
/// }
/// ```
#[derive(Debug, Clone, Serialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,

    /// Offending input field, for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// Environment configuration is invalid
    ConfigError,

    /// Reading input or writing output failed
    IoError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            field: None,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self.code {
            ErrorCode::ValidationError | ErrorCode::ConfigError => ExitCode::from(2),
            ErrorCode::IoError => ExitCode::FAILURE,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError {
            code: ErrorCode::ValidationError,
            field: Some(err.field().to_string()),
            message: err.to_string(),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<io::Error> for ApiError {
    fn from(err: io::Error) -> Self {
        ApiError::new(ErrorCode::IoError, err.to_string())
    }
}
