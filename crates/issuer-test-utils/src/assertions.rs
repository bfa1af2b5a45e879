//! Custom test assertions for expressive tests
//!
//! Provides segment decoding, independent HS256 verification and
//! trait-based assertions for issued tokens.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

/// Exact header bytes every issued token must carry.
pub const EXPECTED_HEADER_JSON: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// Split a token into its three segments, panicking on any other shape.
pub fn segments(token: &str) -> [&str; 3] {
    let parts: Vec<&str> = token.split('.').collect();
    assert_eq!(
        parts.len(),
        3,
        "JWT must have 3 parts (header.payload.signature), got {}",
        parts.len()
    );
    [parts[0], parts[1], parts[2]]
}

/// Decode the header segment to raw JSON bytes.
pub fn decode_header_bytes(token: &str) -> Vec<u8> {
    URL_SAFE_NO_PAD
        .decode(segments(token)[0])
        .expect("Failed to base64url decode JWT header")
}

/// Decode the claims segment to raw JSON bytes.
pub fn decode_claims_bytes(token: &str) -> Vec<u8> {
    URL_SAFE_NO_PAD
        .decode(segments(token)[1])
        .expect("Failed to base64url decode JWT claims")
}

/// Decode the claims segment to a JSON value.
pub fn decode_claims(token: &str) -> serde_json::Value {
    serde_json::from_slice(&decode_claims_bytes(token)).expect("Failed to parse JWT claims JSON")
}

/// Verify a token with `jsonwebtoken`'s HS256 routine.
///
/// Time-based checks are disabled so tokens issued at a pinned instant in
/// the past still verify; only the signature and structure are checked.
pub fn verify_hs256(
    token: &str,
    secret: &str,
) -> Result<serde_json::Value, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.validate_nbf = false;
    validation.required_spec_claims.clear();

    decode::<serde_json::Value>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
}

/// Custom assertions for issued tokens
///
/// # Example
/// ```rust,ignore
/// token
///     .assert_compact_jwt()
///     .assert_standard_header()
///     .assert_issuer("ak-123")
///     .assert_verifies_with("sk-456");
/// ```
pub trait TokenAssertions {
    /// Assert the token is three non-empty base64url segments
    fn assert_compact_jwt(&self) -> &Self;

    /// Assert the header decodes to exactly `{"alg":"HS256","typ":"JWT"}`
    fn assert_standard_header(&self) -> &Self;

    /// Assert the `iss` claim
    fn assert_issuer(&self, issuer: &str) -> &Self;

    /// Assert `exp - nbf` equals the given number of seconds
    fn assert_window_seconds(&self, seconds: i64) -> &Self;

    /// Assert the token verifies under HS256 with `secret`
    fn assert_verifies_with(&self, secret: &str) -> &Self;
}

impl TokenAssertions for str {
    fn assert_compact_jwt(&self) -> &Self {
        for (index, segment) in segments(self).iter().enumerate() {
            assert!(!segment.is_empty(), "JWT segment {} is empty", index);
            assert!(
                URL_SAFE_NO_PAD.decode(segment).is_ok(),
                "JWT segment {} is not unpadded base64url",
                index
            );
        }
        self
    }

    fn assert_standard_header(&self) -> &Self {
        let header = decode_header_bytes(self);
        assert_eq!(
            String::from_utf8_lossy(&header),
            EXPECTED_HEADER_JSON,
            "Unexpected JWT header"
        );
        self
    }

    fn assert_issuer(&self, issuer: &str) -> &Self {
        let claims = decode_claims(self);
        assert_eq!(
            claims["iss"].as_str(),
            Some(issuer),
            "Token issued for '{}', expected '{}'",
            claims["iss"],
            issuer
        );
        self
    }

    fn assert_window_seconds(&self, seconds: i64) -> &Self {
        let claims = decode_claims(self);
        let exp = claims["exp"].as_i64().expect("exp claim must be an integer");
        let nbf = claims["nbf"].as_i64().expect("nbf claim must be an integer");
        assert_eq!(
            exp - nbf,
            seconds,
            "Token window is {}s (exp={}, nbf={}), expected {}s",
            exp - nbf,
            exp,
            nbf,
            seconds
        );
        self
    }

    fn assert_verifies_with(&self, secret: &str) -> &Self {
        let result = verify_hs256(self, secret);
        assert!(
            result.is_ok(),
            "Token failed HS256 verification: {:?}",
            result.err()
        );
        self
    }
}

impl TokenAssertions for String {
    fn assert_compact_jwt(&self) -> &Self {
        self.as_str().assert_compact_jwt();
        self
    }

    fn assert_standard_header(&self) -> &Self {
        self.as_str().assert_standard_header();
        self
    }

    fn assert_issuer(&self, issuer: &str) -> &Self {
        self.as_str().assert_issuer(issuer);
        self
    }

    fn assert_window_seconds(&self, seconds: i64) -> &Self {
        self.as_str().assert_window_seconds(seconds);
        self
    }

    fn assert_verifies_with(&self, secret: &str) -> &Self {
        self.as_str().assert_verifies_with(secret);
        self
    }
}
