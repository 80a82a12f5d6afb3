//! `dns-sweeper` entry point

use std::process::ExitCode;

use clap::Parser;
use dns_sweeper_cli::config::{Cli, Config};
use dns_sweeper_cli::logging::{default_filter, init_logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Nothing is logged before this point, so report straight to stderr
    if let Err(e) = init_logging(&cli.log_file, default_filter()) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let config = match Config::from_env(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(?config, "Configuration loaded");

    if let Err(e) = dns_sweeper_cli::run(&config).await {
        tracing::error!(error = %e, "Fatal error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
