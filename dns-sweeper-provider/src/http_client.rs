//! 通用 HTTP 请求执行
//!
//! 各 Provider 自行构造 `RequestBuilder`（URL、认证头），这里负责发送、
//! 读取响应体并把传输层失败归类为 [`ProviderError`]。
//!
//! 每个请求只发送一次：超时、HTTP 429、网关错误直接返回给调用方，不做重试。

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

pub struct HttpUtils;

impl HttpUtils {
    /// 发送请求，返回 `(状态码, 响应体)`
    ///
    /// 只有传输失败、429 与 502/503/504 在这里转为错误；其他状态码连同响应体
    /// 交给 Provider 按自身的错误格式解析。
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            let detail = e.to_string();
            let provider = provider_name.to_string();
            if e.is_timeout() {
                ProviderError::Timeout { provider, detail }
            } else {
                ProviderError::NetworkError { provider, detail }
            }
        })?;

        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{provider_name}] HTTP {status}: {}",
            truncate_for_log(&body)
        );

        if let Some(err) = transport_error(provider_name, status, retry_after, &body) {
            log::warn!("[{provider_name}] {method_name} {url} failed: {err}");
            return Err(err);
        }

        Ok((status, body))
    }

    /// 解析 JSON 响应体
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!(
                "[{provider_name}] JSON parse failed: {e}, body: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

/// 与 Provider 无关的状态码错误
fn transport_error(
    provider_name: &str,
    status: u16,
    retry_after: Option<u64>,
    body: &str,
) -> Option<ProviderError> {
    match status {
        429 => Some(ProviderError::RateLimited {
            provider: provider_name.to_string(),
            retry_after,
            raw_message: Some(truncate_for_log(body)),
        }),
        502..=504 => Some(ProviderError::NetworkError {
            provider: provider_name.to_string(),
            detail: format!("HTTP {status}: {}", truncate_for_log(body)),
        }),
        _ => None,
    }
}
