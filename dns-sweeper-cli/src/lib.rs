//! # dns-sweeper
//!
//! Deletes Cloudflare DNS records whose names are listed in a hostnames file.
//!
//! For every hostname the zone is resolved, all records with exactly that name
//! are fetched, and each one is deleted (or only logged when running without
//! `--apply`). Failures for one hostname or record are logged and skipped.

pub mod config;
pub mod error;
pub mod hostnames;
pub mod logging;
pub mod sweeper;
pub mod zone;

#[cfg(test)]
mod test_utils;

use dns_sweeper_provider::create_provider;

use crate::config::Config;
use crate::error::CliResult;
use crate::hostnames::read_hostnames;
use crate::sweeper::Sweeper;

/// Read the hostnames file, build the provider and sweep every hostname.
///
/// Only setup failures are returned; per-hostname failures are logged.
pub async fn run(config: &Config) -> CliResult<()> {
    let hostnames = read_hostnames(&config.hostnames_file)?;
    let provider = create_provider(config.credentials())?;

    tracing::info!(
        provider = %config.credentials().provider_type(),
        zone = %config.zone_source,
        apply = config.apply,
        file = %config.hostnames_file.display(),
        count = hostnames.len(),
        "Starting sweep"
    );
    if !config.apply {
        tracing::info!("Dry run: no records will be deleted (pass --apply to delete)");
    }

    Sweeper::new(provider.as_ref(), config.sweep_options())
        .run(&hostnames)
        .await;

    tracing::info!("Sweep finished");
    Ok(())
}
