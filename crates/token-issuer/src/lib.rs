//! Token Issuer Library
//!
//! Builds short-lived HS256 API tokens from an access key and secret key.
//!
//! # Modules
//!
//! - `cli` - Command-line surface of the `issue-token` binary
//! - `config` - Credential and output configuration
//! - `crypto` - Token header/claims types and HMAC-SHA256 signing
//! - `errors` - Error types
//! - `services` - Token issuance

pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod services;
