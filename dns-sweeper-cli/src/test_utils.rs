//! 测试辅助模块
//!
//! 提供记录所有调用的 `MockProvider`。

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use dns_sweeper_provider::{DnsProvider, DnsRecord, ProviderError, Result};
use tokio::sync::Mutex;

/// 对 Provider 的一次调用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ResolveZone(String),
    ListRecords { zone_id: String, name: String },
    DeleteRecord { zone_id: String, record_id: String },
}

// ===== MockProvider =====

#[derive(Default)]
pub struct MockProvider {
    /// zone 名称 -> zone ID
    zones: HashMap<String, String>,
    /// (zone ID, 记录名称) -> 记录
    records: HashMap<(String, String), Vec<DnsRecord>>,
    /// list_records 对这些名称返回错误
    failing_lists: HashSet<String>,
    /// delete_record 对这些记录 ID 返回错误
    failing_deletes: HashSet<String>,
    calls: Mutex<Vec<Call>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zone(mut self, name: &str, id: &str) -> Self {
        self.zones.insert(name.to_string(), id.to_string());
        self
    }

    pub fn with_record(mut self, zone_id: &str, id: &str, name: &str, record_type: &str) -> Self {
        self.records
            .entry((zone_id.to_string(), name.to_string()))
            .or_default()
            .push(DnsRecord {
                id: id.to_string(),
                zone_id: zone_id.to_string(),
                name: name.to_string(),
                record_type: record_type.to_string(),
                content: "192.0.2.1".to_string(),
                ttl: 1,
                proxied: Some(false),
            });
        self
    }

    pub fn failing_list(mut self, name: &str) -> Self {
        self.failing_lists.insert(name.to_string());
        self
    }

    pub fn failing_delete(mut self, record_id: &str) -> Self {
        self.failing_deletes.insert(record_id.to_string());
        self
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.calls.lock().await.clone()
    }

    pub async fn deleted_ids(&self) -> Vec<String> {
        self.calls()
            .await
            .into_iter()
            .filter_map(|call| match call {
                Call::DeleteRecord { record_id, .. } => Some(record_id),
                _ => None,
            })
            .collect()
    }

    pub async fn resolve_count(&self) -> usize {
        self.calls()
            .await
            .iter()
            .filter(|call| matches!(call, Call::ResolveZone(_)))
            .count()
    }
}

#[async_trait]
impl DnsProvider for MockProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn resolve_zone_id(&self, zone_name: &str) -> Result<String> {
        self.calls
            .lock()
            .await
            .push(Call::ResolveZone(zone_name.to_string()));

        self.zones
            .get(zone_name)
            .cloned()
            .ok_or_else(|| ProviderError::DomainNotFound {
                provider: "mock".to_string(),
                domain: zone_name.to_string(),
                raw_message: None,
            })
    }

    async fn list_records(&self, zone_id: &str, name: &str) -> Result<Vec<DnsRecord>> {
        self.calls.lock().await.push(Call::ListRecords {
            zone_id: zone_id.to_string(),
            name: name.to_string(),
        });

        if self.failing_lists.contains(name) {
            return Err(ProviderError::NetworkError {
                provider: "mock".to_string(),
                detail: "connection reset".to_string(),
            });
        }

        Ok(self
            .records
            .get(&(zone_id.to_string(), name.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn delete_record(&self, zone_id: &str, record_id: &str) -> Result<()> {
        self.calls.lock().await.push(Call::DeleteRecord {
            zone_id: zone_id.to_string(),
            record_id: record_id.to_string(),
        });

        if self.failing_deletes.contains(record_id) {
            return Err(ProviderError::RecordNotFound {
                provider: "mock".to_string(),
                record_id: record_id.to_string(),
                raw_message: None,
            });
        }

        Ok(())
    }
}
