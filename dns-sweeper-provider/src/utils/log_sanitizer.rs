//! Log sanitization utilities
//!
//! Keeps API tokens and oversized response bodies out of debug/error logs.

/// Maximum number of bytes of a response body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a secret left visible by [`mask_secret`].
const VISIBLE_SECRET_CHARS: usize = 4;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index)
        .rev()
        .find(|&i| s.is_char_boundary(i))
        .unwrap_or(0)
}

/// Truncate a response body for safe logging.
///
/// Bodies within the limit are returned unchanged; longer ones keep their
/// first `TRUNCATE_LIMIT` bytes (on a char boundary) and note the full size.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a secret such as an API token, keeping only a short prefix.
///
/// Secrets too short to reveal a prefix safely are fully masked.
pub fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(VISIBLE_SECRET_CHARS).collect();
    if secret.chars().count() <= VISIBLE_SECRET_CHARS * 2 {
        "****".to_string()
    } else {
        format!("{visible}****")
    }
}
