//! Common configuration types for the token issuer crates.

use serde::{Deserialize, Serialize};

/// Log filter applied when neither a flag nor `RUST_LOG` provides one.
///
/// Kept at `warn` so a plain invocation writes nothing but the token.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Observability configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log filter directive (e.g. `info`, `token_issuer=debug`)
    pub log_level: String,
    /// Enable JSON-formatted logs
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            json_logs: false,
        }
    }
}
