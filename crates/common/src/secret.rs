//! Secret types for keeping signing keys out of logs.
//!
//! This module re-exports types from the [`secrecy`] crate. The secret key
//! that signs issued tokens travels through configuration, CLI parsing and the
//! issuer itself, and every one of those types derives `Debug`. Holding the
//! key as a [`SecretString`] means `{:?}` and tracing fields print
//! `[REDACTED]` instead of key material.
//!
//! Secrets are zeroized when dropped.
//!
//! # Example
//!
//! ```rust
//! use common::secret::{ExposeSecret, SecretString};
//!
//! #[derive(Debug)]
//! struct ApiCredentials {
//!     access_key: String,
//!     secret_key: SecretString,
//! }
//!
//! let creds = ApiCredentials {
//!     access_key: "ak-123".to_string(),
//!     secret_key: SecretString::from("sk-456"),
//! };
//!
//! assert!(!format!("{creds:?}").contains("sk-456"));
//!
//! // Reading the key is always an explicit call
//! let key_bytes: &[u8] = creds.secret_key.expose_secret().as_bytes();
//! assert_eq!(key_bytes, b"sk-456");
//! ```

// Re-export the main types from secrecy
pub use secrecy::{ExposeSecret, SecretBox, SecretString};
