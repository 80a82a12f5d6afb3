//! Cloudflare error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::CloudflareProvider;

/// Cloudflare 错误码映射
///
/// 参考: <https://developers.cloudflare.com/fundamentals/api/reference/>
impl ProviderErrorMapper for CloudflareProvider {
    fn provider_name(&self) -> &'static str {
        "cloudflare"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // 认证失败（请求头 / token 无效、鉴权次数超限）
            Some("6003" | "6103" | "6111" | "9109" | "10000") => {
                ProviderError::InvalidCredentials {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            // 1004: 记录校验失败, 9000: name 无效
            Some(code @ ("1004" | "9000")) => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: if code == "9000" { "name" } else { "general" }.to_string(),
                detail: raw.message,
            },

            // 记录已不存在（重复删除时常见）
            Some("81044") => ProviderError::RecordNotFound {
                provider: self.provider_name().to_string(),
                record_id: context.record_id.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            // zone ID 无效或路由不到对应对象
            Some("1001" | "1003" | "7000" | "7003") => ProviderError::DomainNotFound {
                provider: self.provider_name().to_string(),
                domain: context.zone.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            _ => self.unknown_error(raw),
        }
    }
}

impl CloudflareProvider {
    /// 响应体无法解析为 Cloudflare JSON 时，按 HTTP 状态码兜底
    pub(crate) fn map_http_status(
        &self,
        status: u16,
        body: &str,
        context: ErrorContext,
    ) -> ProviderError {
        let message = format!("HTTP {status}: {body}");
        match status {
            401 => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(message),
            },
            403 => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(message),
            },
            404 => ProviderError::DomainNotFound {
                provider: self.provider_name().to_string(),
                domain: context.zone.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(message),
            },
            _ => self.unknown_error(RawApiError::new(message)),
        }
    }
}
