//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use dns_sweeper_provider::{DnsProvider, ProviderCredentials, create_provider};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 测试上下文 - 封装 Provider 和测试区域
pub struct TestContext {
    pub provider: Arc<dyn DnsProvider>,
    pub zone_name: String,
}

impl TestContext {
    /// 创建 Cloudflare 测试上下文
    pub fn cloudflare() -> Option<Self> {
        let api_token = env::var("CLOUDFLARE_API_TOKEN").ok()?;
        let zone_name = env::var("TEST_DOMAIN").ok()?;

        let provider = create_provider(ProviderCredentials::Cloudflare { api_token }).ok()?;

        Some(Self {
            provider,
            zone_name,
        })
    }

    /// 生成一个几乎不可能存在的主机名
    pub fn missing_hostname(&self) -> String {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        format!("_sweeper-test-{nanos}.{}", self.zone_name)
    }
}
