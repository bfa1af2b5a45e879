use crate::config::OutputFormat;
use crate::crypto::{self, TokenClaims, TokenHeader};
use crate::errors::EncodingError;
use chrono::Utc;
use common::observability::hash_for_correlation;
use common::secret::{ExposeSecret, SecretString};
use std::fmt;
use tracing::instrument;

/// Lifetime of an issued token.
pub const TOKEN_VALIDITY_SECONDS: i64 = 1800; // 30 minutes

/// How far before issuance `nbf` is backdated to absorb clock drift.
pub const NOT_BEFORE_SKEW_SECONDS: i64 = 5;

/// Access key and secret key pair used to issue tokens.
///
/// The secret key is redacted in Debug output.
#[derive(Debug, Clone)]
pub struct Credentials {
    access_key: String,
    secret_key: SecretString,
}

impl Credentials {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<SecretString>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub fn secret_key(&self) -> &SecretString {
        &self.secret_key
    }
}

/// A freshly signed token together with the claims it carries.
#[derive(Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: TokenClaims,
}

impl fmt::Debug for IssuedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssuedToken")
            .field("token", &"[REDACTED]")
            .field("claims", &self.claims)
            .finish()
    }
}

impl IssuedToken {
    /// Render the token as a single output line.
    pub fn render(&self, format: OutputFormat) -> Result<String, EncodingError> {
        match format {
            OutputFormat::Token => Ok(self.token.clone()),
            OutputFormat::Json => serde_json::to_string(&serde_json::json!({
                "token": self.token,
                "iss": self.claims.iss,
                "exp": self.claims.exp,
                "nbf": self.claims.nbf,
            }))
            .map_err(|e| EncodingError::Serialization(format!("JSON output: {}", e))),
        }
    }
}

/// Issues HS256 tokens for a single set of credentials.
///
/// Stateless apart from the credentials; safe to share across threads.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    credentials: Credentials,
}

impl TokenIssuer {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Issue a token valid from 5 seconds ago until 30 minutes from now.
    pub fn issue(&self) -> Result<IssuedToken, EncodingError> {
        self.issue_at(Utc::now().timestamp())
    }

    /// Issue a token against an explicit `now` (Unix seconds).
    ///
    /// Prefer [`TokenIssuer::issue`] in production code. Identical credentials
    /// and `now` always produce a byte-identical token.
    #[instrument(skip_all)]
    pub fn issue_at(&self, now: i64) -> Result<IssuedToken, EncodingError> {
        let claims = build_claims(&self.credentials.access_key, now)?;

        let token = crypto::sign_jwt(
            &TokenHeader::default(),
            &claims,
            self.credentials.secret_key.expose_secret().as_bytes(),
        )?;

        tracing::debug!(
            target: "token_issuer.issue",
            issuer = %hash_for_correlation(&claims.iss),
            exp = claims.exp,
            nbf = claims.nbf,
            "Token issued"
        );

        Ok(IssuedToken { token, claims })
    }
}

/// Issue a token for `issuer` signed with `secret`, using the current time.
pub fn issue(issuer: &str, secret: &str) -> Result<String, EncodingError> {
    issue_at(issuer, secret, Utc::now().timestamp())
}

/// Issue a token for `issuer` signed with `secret` at an explicit `now`.
pub fn issue_at(issuer: &str, secret: &str, now: i64) -> Result<String, EncodingError> {
    TokenIssuer::new(Credentials::new(issuer, secret))
        .issue_at(now)
        .map(|issued| issued.token)
}

fn build_claims(issuer: &str, now: i64) -> Result<TokenClaims, EncodingError> {
    if issuer.is_empty() {
        return Err(EncodingError::EmptyIssuer);
    }

    let exp = now
        .checked_add(TOKEN_VALIDITY_SECONDS)
        .ok_or(EncodingError::TimestampOutOfRange(now))?;
    let nbf = now
        .checked_sub(NOT_BEFORE_SKEW_SECONDS)
        .ok_or(EncodingError::TimestampOutOfRange(now))?;

    Ok(TokenClaims {
        iss: issuer.to_string(),
        exp,
        nbf,
    })
}
