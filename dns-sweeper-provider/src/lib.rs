//! # dns-sweeper-provider
//!
//! DNS provider abstraction used by `dns-sweeper` to look up and delete records.
//!
//! ## Supported Providers
//!
//! | Provider | Feature Flag | Auth Method |
//! |----------|-------------|-------------|
//! | [Cloudflare](https://www.cloudflare.com/) | `cloudflare` | Bearer Token |
//!
//! ## Feature Flags
//!
//! - **`cloudflare`** *(default)*: Enable the Cloudflare provider.
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for static and cross-compiled builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns_sweeper_provider::{create_provider, DnsProvider, ProviderCredentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(ProviderCredentials::Cloudflare {
//!         api_token: "your-token".to_string(),
//!     })?;
//!
//!     let zone_id = provider.resolve_zone_id("example.com").await?;
//!     for record in provider.list_records(&zone_id, "old.example.com").await? {
//!         println!("{} {} -> {}", record.name, record.record_type, record.content);
//!         provider.delete_record(&zone_id, &record.id).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//! Requests are sent once; transient failures (`NetworkError`, `Timeout`,
//! `RateLimited`) are reported to the caller and never retried.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

pub use error::{ProviderError, Result};
pub use factory::create_provider;
pub use traits::DnsProvider;
pub use types::{DnsRecord, ProviderCredentials, ProviderType};
pub use utils::log_sanitizer;

#[cfg(feature = "cloudflare")]
pub use providers::CloudflareProvider;
