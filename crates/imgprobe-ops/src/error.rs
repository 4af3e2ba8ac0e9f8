//! Error types for analysis operations.

use thiserror::Error;

/// Error type for analysis operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Invalid dimensions specified.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for analysis operations.
pub type OpsResult<T> = Result<T, OpsError>;
