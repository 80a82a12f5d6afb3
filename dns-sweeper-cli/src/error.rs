//! Fatal error type for the sweeper binary

use std::path::PathBuf;

use dns_sweeper_provider::ProviderError;
use thiserror::Error;

/// Errors that abort the run before any record is touched.
///
/// Per-hostname and per-record failures are logged and skipped by the
/// sweeper instead of surfacing here.
#[derive(Debug, Error)]
pub enum CliError {
    /// A required setting was given neither as a flag nor in the environment
    #[error("{name} is not set (use --{flag} or the {env} environment variable)")]
    MissingSetting {
        name: &'static str,
        flag: &'static str,
        env: &'static str,
    },

    /// The hostnames file could not be opened or read
    #[error("Failed to read hostnames file '{}': {source}", .path.display())]
    InputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The JSON log file could not be opened for appending
    #[error("Failed to open log file '{}': {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A global logger was already installed
    #[error("Failed to install logger: {0}")]
    LoggerInit(String),

    /// Provider construction failed
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

/// Result alias for fatal errors
pub type CliResult<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_setting_message_names_flag_and_env() {
        let e = CliError::MissingSetting {
            name: "API token",
            flag: "apitoken",
            env: "CLOUDFLARE_API_TOKEN",
        };
        assert_eq!(
            e.to_string(),
            "API token is not set (use --apitoken or the CLOUDFLARE_API_TOKEN environment variable)"
        );
    }

    #[test]
    fn input_file_message_includes_path() {
        let e = CliError::InputFile {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            e.to_string(),
            "Failed to read hostnames file 'missing.txt': not found"
        );
    }

    #[test]
    fn provider_error_converts() {
        let e: CliError = ProviderError::ClientBuild {
            provider: "cloudflare".to_string(),
            detail: "no TLS backend".to_string(),
        }
        .into();
        assert!(matches!(e, CliError::Provider(_)));
        assert_eq!(
            e.to_string(),
            "[cloudflare] Failed to create HTTP client: no TLS backend"
        );
    }
}
