//! Error types for quaternion operations
//!
//! Two failure kinds exist and they stay distinguishable by variant, not just
//! by message text:
//! - [`QuaternionError::Format`] when a literal does not match `a+bi+cj+dk`
//! - [`QuaternionError::Division`] when an operand that must be inverted is zero
//!
//! Each variant also carries a stable error code and a category so embedding
//! programs can report failures without matching on message strings.
//!
//! # Example
//!
//! ```rust
//! use quaternion_core::{Quaternion, QuaternionError, ErrorCategory};
//!
//! let err = Quaternion::zero().inverse().unwrap_err();
//! assert!(matches!(err, QuaternionError::Division { .. }));
//! assert_eq!(err.category(), ErrorCategory::Arithmetic);
//! assert_eq!(err.error_code(), "DIVISION_ERROR");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for quaternion operations
pub type Result<T> = std::result::Result<T, QuaternionError>;

/// Error category for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Input text was rejected by the parser
    Validation,
    /// An arithmetic operation has no defined result
    Arithmetic,
}

/// Errors that can occur in quaternion operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuaternionError {
    /// Text does not match the quaternion literal grammar
    #[error("Invalid quaternion literal '{input}'. Format must be 'a+bi+cj+dk'.")]
    Format { input: String },

    /// Divisor or inverted quaternion is (close to) zero
    #[error("Zero quaternion has no inverse. Can't divide by a zero quaternion; operand is {operand}")]
    Division { operand: String },
}

impl QuaternionError {
    /// Build a format error carrying the rejected input
    pub fn format(input: impl Into<String>) -> Self {
        QuaternionError::Format {
            input: input.into(),
        }
    }

    /// Build a division error carrying the formatted zero operand
    pub fn division(operand: impl Into<String>) -> Self {
        QuaternionError::Division {
            operand: operand.into(),
        }
    }

    /// Returns true if this error might succeed on retry
    ///
    /// Neither kind is recoverable: the caller has to supply a different
    /// literal or a non-zero operand.
    pub fn is_recoverable(&self) -> bool {
        false
    }

    /// Returns the error category for grouping
    pub fn category(&self) -> ErrorCategory {
        match self {
            QuaternionError::Format { .. } => ErrorCategory::Validation,
            QuaternionError::Division { .. } => ErrorCategory::Arithmetic,
        }
    }

    /// Returns the stable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            QuaternionError::Format { .. } => "FORMAT_ERROR",
            QuaternionError::Division { .. } => "DIVISION_ERROR",
        }
    }

    /// Converts this error to a JSON-serializable response object
    ///
    /// ```json
    /// {
    ///   "error": {
    ///     "code": "FORMAT_ERROR",
    ///     "message": "Invalid quaternion literal 'x'...",
    ///     "category": "validation",
    ///     "recoverable": false
    ///   }
    /// }
    /// ```
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
                category: self.category(),
                recoverable: self.is_recoverable(),
            },
        }
    }
}

/// JSON-serializable error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorDetail,
}

/// Error detail for JSON responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Stable error code (e.g., "FORMAT_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Error category
    pub category: ErrorCategory,
    /// Whether retry might succeed
    pub recoverable: bool,
}
