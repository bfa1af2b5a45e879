use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use token_issuer::cli::Cli;
use token_issuer::config::Config;
use token_issuer::errors::IssuerError;
use token_issuer::services::token_service::TokenIssuer;
use tracing::{error, info};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to issue token: {}", e);
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<(), IssuerError> {
    // Load configuration
    let config = Config::from_env(cli)?;

    // Initialize tracing (stderr only; stdout carries the token)
    common::observability::init_tracing(&config.observability)?;

    info!(format = %config.output_format, "Configuration loaded");

    let issuer = TokenIssuer::new(config.credentials);
    let issued = issuer.issue()?;
    let line = issued.render(config.output_format)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{line}")?;
    stdout.flush()?;

    Ok(())
}
