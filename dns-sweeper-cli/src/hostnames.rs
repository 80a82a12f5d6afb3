//! Hostnames file reader
//!
//! One hostname per line. Surrounding whitespace is trimmed, and blank lines
//! and `#` comment lines are skipped. No validation of the names themselves.

use std::path::Path;

use crate::error::{CliError, CliResult};

/// Default hostnames file name
pub const DEFAULT_HOSTNAMES_FILE: &str = "hostnames.txt";

/// Extract hostnames from file contents, keeping file order.
pub fn parse_hostnames(contents: &str) -> Vec<String> {
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);

    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToString::to_string)
        .collect()
}

/// Read and parse the hostnames file at `path`.
pub fn read_hostnames(path: &Path) -> CliResult<Vec<String>> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::InputFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_hostnames(&contents))
}
