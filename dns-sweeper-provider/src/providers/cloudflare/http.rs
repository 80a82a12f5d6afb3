//! Cloudflare HTTP 请求方法

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::truncate_for_log;

use super::{CF_API_BASE, CloudflareProvider, CloudflareResponse, CloudflareResultInfo};

impl CloudflareProvider {
    /// 解析响应并处理 `success: false`
    ///
    /// 非 JSON 的错误响应（如网关返回的 HTML）按 HTTP 状态码兜底映射。
    fn parse_response<T: DeserializeOwned>(
        &self,
        status: u16,
        response_text: &str,
        ctx: ErrorContext,
    ) -> Result<CloudflareResponse<T>> {
        let cf_response: CloudflareResponse<T> =
            match HttpUtils::parse_json(response_text, self.provider_name()) {
                Ok(resp) => resp,
                Err(_) if !(200..300).contains(&status) => {
                    return Err(self.map_http_status(
                        status,
                        &truncate_for_log(response_text),
                        ctx,
                    ));
                }
                Err(e) => return Err(e),
            };

        if !cf_response.success {
            let (code, message) = cf_response.first_error();
            log::error!("API 错误: {message}");
            return Err(self.map_error(RawApiError::with_code(code, message), ctx));
        }

        Ok(cf_response)
    }

    /// 执行 GET 请求（列表接口），返回当前页数据与分页信息
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        ctx: ErrorContext,
    ) -> Result<(Vec<T>, Option<CloudflareResultInfo>)> {
        let url = format!("{CF_API_BASE}{path}");
        let request = self.client.get(&url).bearer_auth(&self.api_token);

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "GET", &url).await?;

        let cf_response: CloudflareResponse<Vec<T>> =
            self.parse_response(status, &response_text, ctx)?;

        Ok((
            cf_response.result.unwrap_or_default(),
            cf_response.result_info,
        ))
    }

    /// 执行 DELETE 请求
    pub(crate) async fn delete(&self, path: &str, ctx: ErrorContext) -> Result<()> {
        let url = format!("{CF_API_BASE}{path}");
        let request = self.client.delete(&url).bearer_auth(&self.api_token);

        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "DELETE", &url).await?;

        self.parse_response::<serde_json::Value>(status, &response_text, ctx)?;
        Ok(())
    }
}
