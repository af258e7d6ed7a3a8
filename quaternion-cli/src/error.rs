//! Error types for the quaternion demo driver

use quaternion_core::{ErrorCategory, ErrorDetail, ErrorResponse, QuaternionError};
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can stop the demo driver
#[derive(Error, Debug)]
pub enum CliError {
    /// Config file could not be read
    #[error("Failed to read config '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config or report JSON was malformed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An operand literal was rejected
    #[error(transparent)]
    Quaternion(#[from] QuaternionError),
}

impl CliError {
    /// Stable error code, reusing the core codes for operand failures
    pub fn error_code(&self) -> &'static str {
        match self {
            CliError::ConfigRead { .. } => "CONFIG_READ_ERROR",
            CliError::Json(_) => "JSON_ERROR",
            CliError::Quaternion(e) => e.error_code(),
        }
    }

    /// JSON-serializable form of this error
    pub fn to_error_response(&self) -> ErrorResponse {
        match self {
            CliError::Quaternion(e) => e.to_error_response(),
            other => ErrorResponse {
                error: ErrorDetail {
                    code: other.error_code().to_string(),
                    message: other.to_string(),
                    category: ErrorCategory::Validation,
                    recoverable: false,
                },
            },
        }
    }
}
