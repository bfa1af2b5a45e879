//! Tracing setup and log-safe field helpers.
//!
//! # Privacy by Default
//!
//! Fields are categorized as:
//! - **SAFE**: Can be logged in plaintext (timestamps, output format)
//! - **HASHED**: Logged only through [`hash_for_correlation`] (access keys)
//! - **NEVER**: Must never appear in logs (secret keys, issued tokens)
//!
//! Logs are written to stderr. Stdout belongs to the command's output.

use crate::config::ObservabilityConfig;
use crate::error::{CommonError, Result};
use sha2::{Digest, Sha256};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber.
///
/// # Errors
///
/// - `CommonError::Configuration` if `log_level` is not a valid filter directive
/// - `CommonError::Observability` if a global subscriber is already installed
pub fn init_tracing(config: &ObservabilityConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level).map_err(|e| {
        CommonError::Configuration(format!("invalid log filter '{}': {e}", config.log_level))
    })?;

    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    installed.map_err(|e| CommonError::Observability(e.to_string()))
}

/// Hash a field value for correlation in logs (SHA-256, first 8 hex chars)
///
/// Used for identifiers like the access key that need correlation across log
/// entries but should not be stored in plaintext. This is not a substitute for
/// keeping secrets out of logs entirely.
#[must_use]
pub fn hash_for_correlation(value: &str) -> String {
    let digest = Sha256::digest(value.as_bytes());
    hex::encode(digest).chars().take(8).collect()
}
