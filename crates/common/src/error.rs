//! Common error types for the token issuer crates.

use thiserror::Error;

/// Errors raised by the shared infrastructure (logging, configuration).
#[derive(Error, Debug)]
pub enum CommonError {
    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Tracing subscriber could not be installed
    #[error("Observability error: {0}")]
    Observability(String),
}

/// Result type alias using `CommonError`
pub type Result<T> = std::result::Result<T, CommonError>;
