//! End-to-end tests for the `issue-token` binary.

use issuer_test_utils::*;
use std::process::{Command, Output};

fn issue_token(args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_issue-token"));
    command
        .args(args)
        .env_remove("ISSUER_ACCESS_KEY")
        .env_remove("ISSUER_SECRET_KEY")
        .env_remove("ISSUER_OUTPUT_FORMAT")
        .env_remove("ISSUER_JSON_LOGS")
        .env_remove("RUST_LOG");
    for (key, value) in envs {
        command.env(key, value);
    }
    command.output().expect("failed to run issue-token")
}

#[test]
fn test_flags_print_verifiable_token() {
    let output = issue_token(
        &[
            "--access-key",
            TEST_ACCESS_KEY,
            "--secret-key",
            TEST_SECRET_KEY,
        ],
        &[],
    );

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let token = stdout.trim_end().to_string();
    assert_eq!(stdout.lines().count(), 1);

    token
        .assert_compact_jwt()
        .assert_standard_header()
        .assert_issuer(TEST_ACCESS_KEY)
        .assert_window_seconds(1805)
        .assert_verifies_with(TEST_SECRET_KEY);
}

#[test]
fn test_env_vars_supply_credentials() {
    let output = issue_token(
        &[],
        &[
            ("ISSUER_ACCESS_KEY", "env-access"),
            ("ISSUER_SECRET_KEY", "env-secret"),
        ],
    );

    assert!(output.status.success());
    let token = String::from_utf8(output.stdout).unwrap().trim_end().to_string();
    token.assert_issuer("env-access").assert_verifies_with("env-secret");
}

#[test]
fn test_json_format_reports_claims() {
    let output = issue_token(
        &[
            "--access-key",
            TEST_ACCESS_KEY,
            "--secret-key",
            TEST_SECRET_KEY,
            "--format",
            "json",
        ],
        &[],
    );

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    let token = value["token"].as_str().unwrap();
    token.assert_verifies_with(TEST_SECRET_KEY);
    assert_eq!(value["iss"], TEST_ACCESS_KEY);
    assert_eq!(
        value["exp"].as_i64().unwrap() - value["nbf"].as_i64().unwrap(),
        1805
    );
}

#[test]
fn test_missing_credentials_exit_non_zero() {
    let output = issue_token(&["--access-key", TEST_ACCESS_KEY], &[]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--secret-key"));
    assert!(stderr.contains("ISSUER_SECRET_KEY"));
}

#[test]
fn test_logs_stay_off_stdout_and_never_show_secret() {
    let output = issue_token(
        &[
            "--access-key",
            TEST_ACCESS_KEY,
            "--secret-key",
            TEST_SECRET_KEY,
            "--log-level",
            "debug",
        ],
        &[],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(stdout.lines().count(), 1);
    stdout.trim_end().to_string().assert_compact_jwt();
    assert!(!stderr.contains(TEST_SECRET_KEY));
    assert!(!stderr.contains(stdout.trim_end()));
}
