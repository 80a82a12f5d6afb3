use serde::Serialize;

/// Unified error type for every DNS provider operation used by the sweeper.
///
/// Each variant carries a `provider` field naming the backend that produced it,
/// plus whatever context the failing call had (zone name, record id, ...).
/// Serializes with a `code` tag for callers that report errors as JSON.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// Connection refused, DNS failure, TLS failure, unreadable body, HTTP 5xx.
    NetworkError {
        provider: String,
        detail: String,
    },

    /// The API token was rejected.
    InvalidCredentials {
        provider: String,
        raw_message: Option<String>,
    },

    /// The record to delete no longer exists.
    RecordNotFound {
        provider: String,
        /// ID of the record that was not found.
        record_id: String,
        raw_message: Option<String>,
    },

    /// A request parameter was rejected by the API.
    InvalidParameter {
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The API answered with HTTP 429.
    ///
    /// Surfaced as-is; the sweeper never waits and retries.
    RateLimited {
        provider: String,
        /// `Retry-After` header value in seconds, if present.
        retry_after: Option<u64>,
        raw_message: Option<String>,
    },

    /// The HTTP request timed out.
    Timeout {
        provider: String,
        detail: String,
    },

    /// No zone matches the requested name (or the zone id is unknown).
    DomainNotFound {
        provider: String,
        /// Zone name or id that was not found.
        domain: String,
        raw_message: Option<String>,
    },

    /// More than one zone matches the requested name.
    AmbiguousZone {
        provider: String,
        /// Zone name that was looked up.
        domain: String,
        /// Number of zones returned for that name.
        matches: usize,
    },

    /// The token lacks permission for the requested operation.
    PermissionDenied {
        provider: String,
        raw_message: Option<String>,
    },

    /// Failed to parse the provider's API response.
    ParseError {
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// The HTTP client could not be constructed.
    ClientBuild {
        provider: String,
        /// Details from the HTTP library.
        detail: String,
    },

    /// An error code not mapped to any variant above.
    Unknown {
        provider: String,
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// Whether the failure is an expected outcome (bad input, missing resource),
    /// used to pick `warn` over `error` when logging.
    ///
    /// **Keep this in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::RecordNotFound { .. }
                | Self::InvalidParameter { .. }
                | Self::DomainNotFound { .. }
                | Self::AmbiguousZone { .. }
                | Self::PermissionDenied { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Invalid credentials: {msg}")
                } else {
                    write!(f, "[{provider}] Invalid credentials")
                }
            }
            Self::RecordNotFound {
                provider,
                record_id,
                ..
            } => {
                write!(f, "[{provider}] Record '{record_id}' not found")
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::RateLimited {
                provider,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{provider}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{provider}] Rate limited")
                }
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::DomainNotFound {
                provider,
                domain,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Zone '{domain}' not found: {msg}")
                } else {
                    write!(f, "[{provider}] Zone '{domain}' not found")
                }
            }
            Self::AmbiguousZone {
                provider,
                domain,
                matches,
            } => {
                write!(
                    f,
                    "[{provider}] Zone name '{domain}' is ambiguous ({matches} zones match)"
                )
            }
            Self::PermissionDenied {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Permission denied: {msg}")
                } else {
                    write!(f, "[{provider}] Permission denied")
                }
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::ClientBuild { provider, detail } => {
                write!(f, "[{provider}] Failed to create HTTP client: {detail}")
            }
            Self::Unknown {
                provider,
                raw_message,
                ..
            } => {
                write!(f, "[{provider}] {raw_message}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ProviderError::NetworkError {
            provider: "cloudflare".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[cloudflare] Network error: connection refused");
    }

    #[test]
    fn display_invalid_credentials_with_and_without_message() {
        let with = ProviderError::InvalidCredentials {
            provider: "cloudflare".to_string(),
            raw_message: Some("Invalid API Token".to_string()),
        };
        let without = ProviderError::InvalidCredentials {
            provider: "cloudflare".to_string(),
            raw_message: None,
        };
        assert_eq!(
            with.to_string(),
            "[cloudflare] Invalid credentials: Invalid API Token"
        );
        assert_eq!(without.to_string(), "[cloudflare] Invalid credentials");
    }

    #[test]
    fn display_record_not_found() {
        let e = ProviderError::RecordNotFound {
            provider: "cloudflare".to_string(),
            record_id: "372e6795".to_string(),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[cloudflare] Record '372e6795' not found");
    }

    #[test]
    fn display_rate_limited() {
        let e = ProviderError::RateLimited {
            provider: "cloudflare".to_string(),
            retry_after: Some(30),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[cloudflare] Rate limited (retry after 30s)");
    }

    #[test]
    fn display_zone_not_found() {
        let e = ProviderError::DomainNotFound {
            provider: "cloudflare".to_string(),
            domain: "example.com".to_string(),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[cloudflare] Zone 'example.com' not found");
    }

    #[test]
    fn display_ambiguous_zone() {
        let e = ProviderError::AmbiguousZone {
            provider: "cloudflare".to_string(),
            domain: "example.com".to_string(),
            matches: 2,
        };
        assert_eq!(
            e.to_string(),
            "[cloudflare] Zone name 'example.com' is ambiguous (2 zones match)"
        );
    }

    #[test]
    fn display_unknown_uses_raw_message() {
        let e = ProviderError::Unknown {
            provider: "cloudflare".to_string(),
            raw_code: Some("1001".to_string()),
            raw_message: "something broke".to_string(),
        };
        assert_eq!(e.to_string(), "[cloudflare] something broke");
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = ProviderError::AmbiguousZone {
            provider: "cloudflare".to_string(),
            domain: "example.com".to_string(),
            matches: 3,
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"AmbiguousZone\""));
        assert!(json.contains("\"matches\":3"));
    }

    #[test]
    fn expected_errors_are_warn_level() {
        assert!(
            ProviderError::DomainNotFound {
                provider: "t".into(),
                domain: "x.com".into(),
                raw_message: None,
            }
            .is_expected()
        );
        assert!(
            !ProviderError::NetworkError {
                provider: "t".into(),
                detail: "x".into(),
            }
            .is_expected()
        );
        assert!(
            !ProviderError::RateLimited {
                provider: "t".into(),
                retry_after: None,
                raw_message: None,
            }
            .is_expected()
        );
    }
}
