//! Command-line flags and run configuration
//!
//! Flags are parsed with clap. The API token and zone name may also come from
//! the environment, and a non-empty environment value wins over the flag.

use std::path::PathBuf;

use clap::Parser;
use dns_sweeper_provider::ProviderCredentials;

use crate::error::{CliError, CliResult};
use crate::hostnames::DEFAULT_HOSTNAMES_FILE;
use crate::logging::DEFAULT_LOG_FILE;
use crate::sweeper::SweepOptions;
use crate::zone::ZoneSource;

/// Environment variable holding the Cloudflare API token
pub const API_TOKEN_ENV: &str = "CLOUDFLARE_API_TOKEN";
/// Environment variable holding the fixed zone name
pub const ZONE_NAME_ENV: &str = "CLOUDFLARE_ZONE";

/// Delete DNS records from Cloudflare based on a list of hostnames
#[derive(Debug, Parser)]
#[command(name = "dns-sweeper")]
#[command(version)]
#[command(about = "CLI tool to remove DNS records from Cloudflare")]
#[command(
    long_about = "Reads hostnames from a file, finds every Cloudflare DNS record with a matching name and deletes it. Runs as a dry run unless --apply is given."
)]
pub struct Cli {
    /// Apply changes (without this flag records are only logged)
    #[arg(short, long)]
    pub apply: bool,

    /// Cloudflare API token (CLOUDFLARE_API_TOKEN takes precedence)
    #[arg(short = 't', long = "apitoken")]
    pub api_token: Option<String>,

    /// Cloudflare zone name (CLOUDFLARE_ZONE takes precedence)
    #[arg(short = 'z', long = "zonename")]
    pub zone_name: Option<String>,

    /// Derive the zone from the last two labels of each hostname
    #[arg(short = 'd', long, conflicts_with = "zone_name")]
    pub derive_zone: bool,

    /// File with the hostnames whose DNS records should be deleted
    #[arg(short = 'f', long = "filename", default_value = DEFAULT_HOSTNAMES_FILE)]
    pub filename: PathBuf,

    /// JSON-lines log file (appended to)
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

/// Fully resolved settings for one run
#[derive(Clone)]
pub struct Config {
    pub api_token: String,
    pub zone_source: ZoneSource,
    pub apply: bool,
    pub hostnames_file: PathBuf,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field(
                "api_token",
                &dns_sweeper_provider::log_sanitizer::mask_secret(&self.api_token),
            )
            .field("zone_source", &self.zone_source)
            .field("apply", &self.apply)
            .field("hostnames_file", &self.hostnames_file)
            .finish()
    }
}

impl Config {
    /// Resolve flags against the process environment.
    pub fn from_env(cli: &Cli) -> CliResult<Self> {
        Self::resolve(cli, |key| std::env::var(key).ok())
    }

    /// Resolve flags against an arbitrary environment lookup.
    ///
    /// Empty strings count as unset, both for flags and for variables.
    pub fn resolve(cli: &Cli, env: impl Fn(&str) -> Option<String>) -> CliResult<Self> {
        let pick = |env_key: &str, flag: Option<&String>| {
            env(env_key)
                .filter(|v| !v.trim().is_empty())
                .or_else(|| flag.filter(|v| !v.trim().is_empty()).cloned())
                .map(|v| v.trim().to_string())
        };

        let api_token =
            pick(API_TOKEN_ENV, cli.api_token.as_ref()).ok_or(CliError::MissingSetting {
                name: "API token",
                flag: "apitoken",
                env: API_TOKEN_ENV,
            })?;

        let zone_source = if cli.derive_zone {
            ZoneSource::DerivedFromHostname
        } else {
            let zone_name =
                pick(ZONE_NAME_ENV, cli.zone_name.as_ref()).ok_or(CliError::MissingSetting {
                    name: "Zone name",
                    flag: "zonename",
                    env: ZONE_NAME_ENV,
                })?;
            ZoneSource::Fixed(zone_name)
        };

        Ok(Self {
            api_token,
            zone_source,
            apply: cli.apply,
            hostnames_file: cli.filename.clone(),
        })
    }

    /// Provider credentials for this run
    pub fn credentials(&self) -> ProviderCredentials {
        ProviderCredentials::Cloudflare {
            api_token: self.api_token.clone(),
        }
    }

    /// Options handed to the [`Sweeper`](crate::sweeper::Sweeper)
    pub fn sweep_options(&self) -> SweepOptions {
        SweepOptions {
            apply: self.apply,
            zone_source: self.zone_source.clone(),
        }
    }
}
