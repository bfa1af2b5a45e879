//! Common utilities and types shared across the token issuer crates.

#![warn(clippy::pedantic)]

/// Module for common error types
pub mod error;

/// Module for common configuration
pub mod config;

/// Module for secret types that prevent accidental logging
pub mod secret;

/// Module for tracing setup and log-safe field helpers
pub mod observability;
