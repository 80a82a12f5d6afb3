use serde::Serialize;

// ============ Provider Types ============

/// Identifies which DNS provider implementation to use.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// Cloudflare DNS. Requires feature `cloudflare`.
    #[cfg(feature = "cloudflare")]
    Cloudflare,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "cloudflare")]
            Self::Cloudflare => write!(f, "cloudflare"),
        }
    }
}

/// Credentials for a supported DNS provider.
///
/// Pass this to [`create_provider()`](crate::create_provider) to instantiate a provider.
/// `Debug` never prints the secret itself.
#[derive(Clone, Serialize)]
#[serde(tag = "provider", content = "credentials")]
pub enum ProviderCredentials {
    /// Cloudflare credentials. Requires feature `cloudflare`.
    #[cfg(feature = "cloudflare")]
    #[serde(rename = "cloudflare")]
    Cloudflare {
        /// Cloudflare API token (Bearer).
        api_token: String,
    },
}

impl ProviderCredentials {
    /// Provider type these credentials belong to.
    #[must_use]
    pub fn provider_type(&self) -> ProviderType {
        match self {
            #[cfg(feature = "cloudflare")]
            Self::Cloudflare { .. } => ProviderType::Cloudflare,
        }
    }
}

impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "cloudflare")]
            Self::Cloudflare { api_token } => f
                .debug_struct("Cloudflare")
                .field("api_token", &crate::utils::log_sanitizer::mask_secret(api_token))
                .finish(),
        }
    }
}

// ============ DNS Record Types ============

/// A DNS record as returned by a provider.
///
/// Only the attributes the sweeper reports on are kept. The record type stays a
/// plain string: records are never filtered or validated by type, so an exotic
/// type (`LOC`, `HTTPS`, ...) must not make a listing fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    /// Provider-specific record identifier.
    pub id: String,
    /// Zone identifier this record belongs to.
    pub zone_id: String,
    /// Fully qualified record name (e.g., `"www.example.com"`).
    pub name: String,
    /// Record type as reported by the provider (`"A"`, `"CNAME"`, ...).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record content (address, target, text).
    pub content: String,
    /// Time to live in seconds (`1` means automatic on Cloudflare).
    pub ttl: u32,
    /// Whether the Cloudflare proxy is enabled for this record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
}
