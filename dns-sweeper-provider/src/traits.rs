use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::DnsRecord;

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（各 Provider 格式不同）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
///
/// 映射错误时补充调用方已知的记录 ID / 区域名
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 记录 ID（用于 `RecordNotFound`）
    pub record_id: Option<String>,
    /// 区域名称或 ID（用于 `DomainNotFound`）
    pub zone: Option<String>,
}

impl ErrorContext {
    pub fn for_zone(zone: impl Into<String>) -> Self {
        Self {
            zone: Some(zone.into()),
            ..Self::default()
        }
    }

    pub fn for_record(zone: impl Into<String>, record_id: impl Into<String>) -> Self {
        Self {
            record_id: Some(record_id.into()),
            zone: Some(zone.into()),
        }
    }
}

/// 把 Provider 自己的错误码翻译成 [`ProviderError`]（内部使用）
pub(crate) trait ProviderErrorMapper {
    fn provider_name(&self) -> &'static str;

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 无法识别的错误码统一归为 `Unknown`
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// DNS 提供商 Trait
///
/// 清理流程只需要三个远程操作：按名称解析区域、按名称列出记录、删除记录。
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 将区域名称（如 `example.com`）解析为提供商分配的区域 ID
    async fn resolve_zone_id(&self, zone_name: &str) -> Result<String>;

    /// 列出区域内名称与 `name` 完全相同的全部记录（自动翻页）
    async fn list_records(&self, zone_id: &str, name: &str) -> Result<Vec<DnsRecord>>;

    /// 删除单条记录
    async fn delete_record(&self, zone_id: &str, record_id: &str) -> Result<()>;
}
