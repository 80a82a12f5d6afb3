//! Logging setup
//!
//! Two sinks share one filter: a colorized console layer and a JSON-lines
//! layer appending to a file. `log` records emitted by the provider crate are
//! forwarded through the `tracing-log` bridge when the subscriber is installed.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::error::{CliError, CliResult};

/// Default JSON log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "log.log";

/// `RUST_LOG` if set, otherwise `info`.
pub fn default_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
}

fn open_log_file(path: &Path) -> CliResult<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| CliError::LogFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Build the console + file subscriber without installing it.
pub fn build_subscriber(
    log_file: &Path,
    filter: EnvFilter,
) -> CliResult<impl tracing::Subscriber + Send + Sync + 'static> {
    let file = open_log_file(log_file)?;

    Ok(tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_ansi(true))
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        ))
}

/// Install the global subscriber. Must be called once, before any event is logged.
pub fn init_logging(log_file: &Path, filter: EnvFilter) -> CliResult<()> {
    build_subscriber(log_file, filter)?
        .try_init()
        .map_err(|e| CliError::LoggerInit(e.to_string()))
}
