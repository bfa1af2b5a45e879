//! Deterministic fixtures for testing
//!
//! Fixed credentials and a pinned instant so issued tokens are reproducible.

use token_issuer::services::token_service::{Credentials, TokenIssuer};

/// Access key used across tests.
pub const TEST_ACCESS_KEY: &str = "ALGM8MeM4rNfdrQTHKm44gTMeQEGa8ea";

/// Secret key used across tests.
pub const TEST_SECRET_KEY: &str = "4PMNGtrBgYteRHLCpQ9hC4tNGpYBaLRk";

/// Pinned clock instant (Unix seconds).
pub const TEST_INSTANT: i64 = 1_000_000_000;

/// Token issued for the fixed credentials at `TEST_INSTANT`.
///
/// Computed independently with a reference HMAC-SHA256 implementation.
pub const TEST_VECTOR_TOKEN: &str = concat!(
    "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.",
    "eyJpc3MiOiJBTEdNOE1lTTRyTmZkclFUSEttNDRnVE1lUUVHYThlYSIsImV4cCI6MTAwMDAwMTgwMCwibmJmIjo5OTk5OTk5OTV9.",
    "laSkrHkoXLsB2c3bmTDzP330fj1FusQq0M5wDPbn34w",
);

/// Credentials built from the fixed access and secret key.
pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_ACCESS_KEY, TEST_SECRET_KEY)
}

/// Issuer for the fixed credentials.
pub fn test_issuer() -> TokenIssuer {
    TokenIssuer::new(test_credentials())
}
