//! # Issuer Test Utilities
//!
//! Shared test utilities for the token issuer.
//!
//! This crate provides:
//! - Fixed credentials and a pinned clock instant
//! - Segment decoding and independent HS256 verification
//! - Single-character tampering of issued tokens
//! - Custom assertions (TokenAssertions trait)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use issuer_test_utils::*;
//!
//! #[test]
//! fn test_example() {
//!     let token = test_issuer().issue_at(TEST_INSTANT).unwrap().token;
//!
//!     token
//!         .assert_compact_jwt()
//!         .assert_standard_header()
//!         .assert_window_seconds(1805)
//!         .assert_verifies_with(TEST_SECRET_KEY);
//! }
//! ```

pub mod assertions;
pub mod crypto_fixtures;
pub mod tampering;

// Re-export commonly used items
pub use assertions::*;
pub use crypto_fixtures::*;
pub use tampering::*;
