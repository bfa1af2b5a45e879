//! Structure and determinism of issued tokens.

use issuer_test_utils::*;
use token_issuer::services::token_service::{self, TokenIssuer, Credentials};

// ============================================================================
// Shape
// ============================================================================

#[test]
fn test_token_has_three_segments() {
    let token = token_service::issue(TEST_ACCESS_KEY, TEST_SECRET_KEY).unwrap();

    assert_eq!(token.matches('.').count(), 2);
    token.assert_compact_jwt();
}

#[test]
fn test_header_is_exactly_hs256_jwt() {
    let token = token_service::issue(TEST_ACCESS_KEY, TEST_SECRET_KEY).unwrap();

    token.assert_standard_header();
    assert_eq!(decode_header_bytes(&token), EXPECTED_HEADER_JSON.as_bytes());
}

#[test]
fn test_window_is_1805_seconds_for_arbitrary_credentials() {
    let cases = [
        ("a", "b"),
        ("issuer-with-dashes", "secret with spaces"),
        ("ünïcödé-issuer", "ключ"),
        (TEST_ACCESS_KEY, TEST_SECRET_KEY),
    ];

    for (issuer, secret) in cases {
        let token = token_service::issue(issuer, secret).unwrap();
        token
            .assert_compact_jwt()
            .assert_issuer(issuer)
            .assert_window_seconds(1805);
    }
}

#[test]
fn test_window_holds_across_instants() {
    for now in [0, 5, 1_000_000_000, 4_102_444_800] {
        let issued = test_issuer().issue_at(now).unwrap();

        assert_eq!(issued.claims.exp, now + 1800);
        assert_eq!(issued.claims.nbf, now - 5);
        assert!(issued.claims.exp > issued.claims.nbf);
        issued.token.assert_window_seconds(1805);
    }
}

// ============================================================================
// Fixed-clock example
// ============================================================================

#[test]
fn test_example_vector_claims() {
    let token = token_service::issue_at(TEST_ACCESS_KEY, TEST_SECRET_KEY, TEST_INSTANT).unwrap();

    assert_eq!(
        String::from_utf8(decode_claims_bytes(&token)).unwrap(),
        r#"{"iss":"ALGM8MeM4rNfdrQTHKm44gTMeQEGa8ea","exp":1000001800,"nbf":999999995}"#
    );
    assert_eq!(
        decode_claims(&token),
        serde_json::json!({
            "iss": "ALGM8MeM4rNfdrQTHKm44gTMeQEGa8ea",
            "exp": 1_000_001_800_i64,
            "nbf": 999_999_995_i64,
        })
    );
}

#[test]
fn test_example_vector_full_token() {
    let token = token_service::issue_at(TEST_ACCESS_KEY, TEST_SECRET_KEY, TEST_INSTANT).unwrap();
    assert_eq!(token, TEST_VECTOR_TOKEN);
}

#[test]
fn test_fixed_clock_is_byte_identical() {
    let issuer = TokenIssuer::new(Credentials::new(TEST_ACCESS_KEY, TEST_SECRET_KEY));

    let first = issuer.issue_at(TEST_INSTANT).unwrap();
    let second = issuer.issue_at(TEST_INSTANT).unwrap();

    assert_eq!(first.token, second.token);
    assert_eq!(first.claims, second.claims);
}

#[test]
fn test_issuer_shared_across_threads() {
    let issuer = std::sync::Arc::new(test_issuer());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let issuer = std::sync::Arc::clone(&issuer);
            std::thread::spawn(move || issuer.issue_at(TEST_INSTANT).unwrap().token)
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), TEST_VECTOR_TOKEN);
    }
}
