use crate::config::ConfigError;
use common::error::CommonError;
use thiserror::Error;

/// Failure to build or sign a token.
///
/// Messages never include the secret key or the token itself.
#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("Secret key cannot be used as an HMAC key: key is empty")]
    InvalidKey,

    #[error("Issuer identifier is empty")]
    EmptyIssuer,

    #[error("Timestamp {0} cannot carry the token validity window")]
    TimestampOutOfRange(i64),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Signing error: {0}")]
    Signing(String),
}

/// Top-level error for the `issue-token` binary.
#[derive(Debug, Error)]
pub enum IssuerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Observability(#[from] CommonError),

    #[error("Failed to write token: {0}")]
    Output(#[from] std::io::Error),
}

impl IssuerError {
    /// Process exit code for this error.
    ///
    /// Configuration problems use 2 (usage error), everything else 1.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            IssuerError::Config(_) | IssuerError::Observability(CommonError::Configuration(_)) => 2,
            IssuerError::Encoding(_)
            | IssuerError::Observability(_)
            | IssuerError::Output(_) => 1,
        }
    }
}
