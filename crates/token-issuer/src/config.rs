use crate::cli::Cli;
use crate::services::token_service::Credentials;
use common::config::{ObservabilityConfig, DEFAULT_LOG_LEVEL};
use common::secret::{ExposeSecret, SecretString};
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable holding the access key (token issuer).
pub const ACCESS_KEY_VAR: &str = "ISSUER_ACCESS_KEY";

/// Environment variable holding the HMAC secret key.
pub const SECRET_KEY_VAR: &str = "ISSUER_SECRET_KEY";

/// Environment variable selecting the output format (`token` or `json`).
pub const OUTPUT_FORMAT_VAR: &str = "ISSUER_OUTPUT_FORMAT";

/// Environment variable enabling JSON logs.
pub const JSON_LOGS_VAR: &str = "ISSUER_JSON_LOGS";

/// Standard tracing filter variable.
pub const LOG_LEVEL_VAR: &str = "RUST_LOG";

/// What `issue-token` writes to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// The bare compact token
    #[default]
    Token,
    /// A single-line JSON object with the token and its claims
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "token" => Ok(OutputFormat::Token),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidValue {
                name: OUTPUT_FORMAT_VAR,
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Token => write!(f, "token"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub output_format: OutputFormat,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required credential: pass {flag} or set {var}")]
    MissingCredential {
        flag: &'static str,
        var: &'static str,
    },

    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

impl Config {
    /// Load configuration from CLI flags, falling back to environment variables
    pub fn from_env(cli: &Cli) -> Result<Self, ConfigError> {
        Self::from_vars(cli, &env::vars().collect())
    }

    /// Load configuration from CLI flags and a HashMap (for testing)
    ///
    /// Flags take precedence over variables. Empty values count as missing.
    pub fn from_vars(cli: &Cli, vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let access_key = cli
            .access_key
            .clone()
            .or_else(|| vars.get(ACCESS_KEY_VAR).cloned())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingCredential {
                flag: "--access-key",
                var: ACCESS_KEY_VAR,
            })?;

        let secret_key = cli
            .secret_key
            .clone()
            .or_else(|| vars.get(SECRET_KEY_VAR).map(|v| SecretString::from(v.as_str())))
            .filter(|key| !key.expose_secret().is_empty())
            .ok_or(ConfigError::MissingCredential {
                flag: "--secret-key",
                var: SECRET_KEY_VAR,
            })?;

        let output_format = match (cli.format, vars.get(OUTPUT_FORMAT_VAR)) {
            (Some(format), _) => format,
            (None, Some(raw)) => raw.parse()?,
            (None, None) => OutputFormat::default(),
        };

        let log_level = cli
            .log_level
            .clone()
            .or_else(|| vars.get(LOG_LEVEL_VAR).cloned())
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let json_logs = if cli.json_logs {
            true
        } else {
            match vars.get(JSON_LOGS_VAR) {
                Some(raw) => parse_bool(JSON_LOGS_VAR, raw)?,
                None => false,
            }
        };

        Ok(Config {
            credentials: Credentials::new(access_key, secret_key),
            output_format,
            observability: ObservabilityConfig {
                log_level,
                json_logs,
            },
        })
    }
}

fn parse_bool(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name,
            value: raw.to_string(),
        }),
    }
}
