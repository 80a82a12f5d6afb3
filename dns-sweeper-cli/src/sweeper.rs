//! Record sweep: zone lookup, record lookup and deletion per hostname
//!
//! Hostnames are processed strictly one after another. A failure while
//! handling one hostname or one record is logged and the sweep moves on; no
//! result is collected across hostnames.

use dns_sweeper_provider::{DnsProvider, DnsRecord, ProviderError};

use crate::zone::ZoneSource;

/// Behaviour switches for a sweep
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepOptions {
    /// Actually delete records; when `false` only log what would be deleted
    pub apply: bool,
    /// How the zone name is chosen for each hostname
    pub zone_source: ZoneSource,
}

/// Drives the per-hostname pipeline against a [`DnsProvider`].
pub struct Sweeper<'a> {
    provider: &'a dyn DnsProvider,
    options: SweepOptions,
}

impl<'a> Sweeper<'a> {
    pub fn new(provider: &'a dyn DnsProvider, options: SweepOptions) -> Self {
        Self { provider, options }
    }

    /// Process every hostname in order.
    pub async fn run(&self, hostnames: &[String]) {
        for hostname in hostnames {
            self.sweep_hostname(hostname).await;
        }
    }

    /// Resolve the zone, fetch matching records and delete (or report) each one.
    pub async fn sweep_hostname(&self, hostname: &str) {
        let Ok(zone_id) = self.resolve_zone(hostname).await else {
            return;
        };

        let Ok(records) = self.fetch_records(&zone_id, hostname).await else {
            return;
        };

        let mut failed = 0_usize;
        for record in &records {
            if self.delete_record(record).await.is_err() {
                failed += 1;
            }
        }

        if failed > 0 {
            tracing::warn!(
                hostname,
                failed,
                total = records.len(),
                "Some records were not deleted"
            );
        }
    }

    /// Look up the zone ID for `hostname`. Not cached between hostnames.
    pub async fn resolve_zone(&self, hostname: &str) -> Result<String, ProviderError> {
        let zone_name = self.options.zone_source.zone_name_for(hostname);

        match self.provider.resolve_zone_id(&zone_name).await {
            Ok(zone_id) => {
                tracing::debug!(hostname, %zone_name, %zone_id, "Resolved zone");
                Ok(zone_id)
            }
            Err(e) => {
                if e.is_expected() {
                    tracing::warn!(hostname, %zone_name, error = %e, "Failed to fetch zone ID");
                } else {
                    tracing::error!(hostname, %zone_name, error = %e, "Failed to fetch zone ID");
                }
                Err(e)
            }
        }
    }

    /// Fetch all records in `zone_id` whose name equals `hostname`.
    ///
    /// An empty result is not an error.
    pub async fn fetch_records(
        &self,
        zone_id: &str,
        hostname: &str,
    ) -> Result<Vec<DnsRecord>, ProviderError> {
        tracing::info!(hostname, zone_id, "Fetching records");

        match self.provider.list_records(zone_id, hostname).await {
            Ok(records) => {
                if records.is_empty() {
                    tracing::info!(hostname, "No records found");
                } else {
                    tracing::info!(hostname, count = records.len(), "Found records");
                }
                Ok(records)
            }
            Err(e) => {
                tracing::error!(hostname, zone_id, error = %e, "Failed to fetch DNS records");
                Err(e)
            }
        }
    }

    /// Delete one record, or only log it in dry-run mode.
    pub async fn delete_record(&self, record: &DnsRecord) -> Result<(), ProviderError> {
        if !self.options.apply {
            tracing::info!(
                record_id = %record.id,
                zone_id = %record.zone_id,
                name = %record.name,
                record_type = %record.record_type,
                content = %record.content,
                ttl = record.ttl,
                proxied = record.proxied,
                "[DRY RUN] Deleting record"
            );
            return Ok(());
        }

        match self
            .provider
            .delete_record(&record.zone_id, &record.id)
            .await
        {
            Ok(()) => {
                tracing::info!(
                    record_id = %record.id,
                    zone_id = %record.zone_id,
                    name = %record.name,
                    record_type = %record.record_type,
                    content = %record.content,
                    ttl = record.ttl,
                    proxied = record.proxied,
                    "Deleted record"
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    record_id = %record.id,
                    name = %record.name,
                    error = %e,
                    "Failed to delete DNS record"
                );
                Err(e)
            }
        }
    }
}
