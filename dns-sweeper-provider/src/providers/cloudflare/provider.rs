//! Cloudflare DnsProvider trait 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::providers::common::normalize_domain_name;
use crate::traits::{DnsProvider, ErrorContext, ProviderErrorMapper};
use crate::types::DnsRecord;

use super::{
    CloudflareDnsRecord, CloudflareProvider, CloudflareResultInfo, CloudflareZone,
    MAX_PAGE_SIZE_RECORDS, MAX_PAGE_SIZE_ZONES,
};

impl CloudflareProvider {
    /// 从按名称查询到的 zone 列表中选出唯一匹配项
    pub(crate) fn pick_zone(&self, zone_name: &str, zones: Vec<CloudflareZone>) -> Result<String> {
        let mut matching: Vec<CloudflareZone> = zones
            .into_iter()
            .filter(|zone| normalize_domain_name(&zone.name) == zone_name)
            .collect();

        match matching.len() {
            0 => Err(ProviderError::DomainNotFound {
                provider: self.provider_name().to_string(),
                domain: zone_name.to_string(),
                raw_message: None,
            }),
            1 => Ok(matching.remove(0).id),
            n => Err(ProviderError::AmbiguousZone {
                provider: self.provider_name().to_string(),
                domain: zone_name.to_string(),
                matches: n,
            }),
        }
    }

    /// 将 Cloudflare 记录转换为 `DnsRecord`
    ///
    /// 响应未携带 `zone_id` 时使用查询所用的 zone ID
    pub(crate) fn cf_record_to_dns_record(
        cf_record: CloudflareDnsRecord,
        zone_id: &str,
    ) -> DnsRecord {
        DnsRecord {
            id: cf_record.id,
            zone_id: cf_record.zone_id.unwrap_or_else(|| zone_id.to_string()),
            name: cf_record.name,
            record_type: cf_record.record_type,
            content: cf_record.content,
            ttl: cf_record.ttl,
            proxied: cf_record.proxied,
        }
    }
}

/// 判断是否还需要继续请求下一页
///
/// 有 `total_pages` 时以其为准；否则当前页满页即视为可能还有数据。
pub(crate) fn has_more_pages(
    page: u32,
    fetched: usize,
    info: Option<&CloudflareResultInfo>,
) -> bool {
    if fetched == 0 {
        return false;
    }
    match info.and_then(|i| i.total_pages) {
        Some(total_pages) => page < total_pages,
        None => fetched >= MAX_PAGE_SIZE_RECORDS as usize,
    }
}

#[async_trait]
impl DnsProvider for CloudflareProvider {
    fn id(&self) -> &'static str {
        "cloudflare"
    }

    async fn resolve_zone_id(&self, zone_name: &str) -> Result<String> {
        let zone_name = normalize_domain_name(zone_name);
        let path = format!(
            "/zones?name={}&per_page={MAX_PAGE_SIZE_ZONES}",
            urlencoding::encode(&zone_name)
        );

        let (zones, _): (Vec<CloudflareZone>, _) = self
            .get_list(&path, ErrorContext::for_zone(&zone_name))
            .await?;

        self.pick_zone(&zone_name, zones)
    }

    async fn list_records(&self, zone_id: &str, name: &str) -> Result<Vec<DnsRecord>> {
        let name = normalize_domain_name(name);
        let mut records = Vec::new();
        let mut page = 1;

        loop {
            let path = format!(
                "/zones/{zone_id}/dns_records?name={}&page={page}&per_page={MAX_PAGE_SIZE_RECORDS}",
                urlencoding::encode(&name)
            );
            let (cf_records, info): (Vec<CloudflareDnsRecord>, _) = self
                .get_list(&path, ErrorContext::for_zone(zone_id))
                .await?;

            let fetched = cf_records.len();
            records.extend(
                cf_records
                    .into_iter()
                    .map(|r| Self::cf_record_to_dns_record(r, zone_id)),
            );

            if !has_more_pages(page, fetched, info.as_ref()) {
                break;
            }
            page += 1;
        }

        Ok(records)
    }

    async fn delete_record(&self, zone_id: &str, record_id: &str) -> Result<()> {
        self.delete(
            &format!("/zones/{zone_id}/dns_records/{record_id}"),
            ErrorContext::for_record(zone_id, record_id),
        )
        .await
    }
}
