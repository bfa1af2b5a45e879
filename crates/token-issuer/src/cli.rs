//! Command-line surface of `issue-token`.
//!
//! Every flag is optional at parse time; missing values fall back to
//! environment variables in [`crate::config::Config::from_env`].

use crate::config::OutputFormat;
use clap::Parser;
use common::secret::SecretString;

/// Issue a short-lived HS256 API token and print it to stdout
#[derive(Parser, Debug)]
#[command(name = "issue-token", author, version, about, long_about = None)]
pub struct Cli {
    /// Access key placed in the `iss` claim [env: ISSUER_ACCESS_KEY]
    #[arg(long)]
    pub access_key: Option<String>,

    /// Secret key used as the HMAC-SHA256 signing key [env: ISSUER_SECRET_KEY]
    #[arg(long, value_parser = parse_secret)]
    pub secret_key: Option<SecretString>,

    /// Output format [env: ISSUER_OUTPUT_FORMAT] [default: token]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log filter directive, written to stderr [env: RUST_LOG] [default: warn]
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON [env: ISSUER_JSON_LOGS]
    #[arg(long)]
    pub json_logs: bool,
}

fn parse_secret(raw: &str) -> Result<SecretString, String> {
    Ok(SecretString::from(raw))
}
