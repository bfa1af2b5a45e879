use crate::errors::EncodingError;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use jsonwebtoken::{crypto, Algorithm, EncodingKey};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Algorithm tag written to every token header.
pub const TOKEN_ALGORITHM: &str = "HS256";

/// Type tag written to every token header.
pub const TOKEN_TYPE: &str = "JWT";

/// JWT header.
///
/// Field order is part of the wire format: the encoded header is always
/// `{"alg":"HS256","typ":"JWT"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenHeader {
    pub alg: &'static str,
    pub typ: &'static str,
}

impl Default for TokenHeader {
    fn default() -> Self {
        Self {
            alg: TOKEN_ALGORITHM,
            typ: TOKEN_TYPE,
        }
    }
}

/// JWT Claims structure.
///
/// Serialized as `{"iss":..,"exp":..,"nbf":..}`. The `iss` field carries
/// the caller's access key and is redacted in Debug output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub iss: String, // Issuer (access key)
    pub exp: i64,    // Expiration timestamp
    pub nbf: i64,    // Not-before timestamp
}

impl fmt::Debug for TokenClaims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenClaims")
            .field("iss", &"[REDACTED]")
            .field("exp", &self.exp)
            .field("nbf", &self.nbf)
            .finish()
    }
}

/// Sign a JWT with an HMAC-SHA256 shared secret.
///
/// Produces `base64url(header).base64url(claims).base64url(signature)`
/// without padding. An empty key is rejected rather than signed with.
#[instrument(skip_all)]
pub fn sign_jwt(
    header: &TokenHeader,
    claims: &TokenClaims,
    secret: &[u8],
) -> Result<String, EncodingError> {
    if secret.is_empty() {
        return Err(EncodingError::InvalidKey);
    }

    let header_json = serde_json::to_vec(header)
        .map_err(|e| EncodingError::Serialization(format!("JWT header: {}", e)))?;
    let claims_json = serde_json::to_vec(claims)
        .map_err(|e| EncodingError::Serialization(format!("JWT claims: {}", e)))?;

    let signing_input = format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(header_json),
        URL_SAFE_NO_PAD.encode(claims_json)
    );

    let encoding_key = EncodingKey::from_secret(secret);
    let signature = crypto::sign(signing_input.as_bytes(), &encoding_key, Algorithm::HS256)
        .map_err(|e| EncodingError::Signing(format!("JWT signing operation failed: {}", e)))?;

    Ok(format!("{}.{}", signing_input, signature))
}
