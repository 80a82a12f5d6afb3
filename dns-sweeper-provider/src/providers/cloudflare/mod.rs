//! Cloudflare DNS Provider

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::create_http_client;

pub(crate) use types::{
    CloudflareDnsRecord, CloudflareResponse, CloudflareResultInfo, CloudflareZone,
};

pub(crate) const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";
/// Cloudflare Zones API 单页最大记录数
pub(crate) const MAX_PAGE_SIZE_ZONES: u32 = 50;
/// Cloudflare DNS Records API 单页最大记录数
pub(crate) const MAX_PAGE_SIZE_RECORDS: u32 = 100;

/// Cloudflare DNS Provider
pub struct CloudflareProvider {
    pub(crate) client: Client,
    pub(crate) api_token: String,
}

impl CloudflareProvider {
    /// 使用 API Token 创建 Provider
    ///
    /// 仅当底层 HTTP Client 无法构建（如 TLS 后端初始化失败）时返回错误。
    pub fn new(api_token: String) -> Result<Self> {
        Ok(Self {
            client: create_http_client("cloudflare")?,
            api_token,
        })
    }
}
