#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Cloudflare Provider 集成测试（只读，不会删除任何已有记录）
//!
//! 运行方式:
//! ```bash
//! CLOUDFLARE_API_TOKEN=xxx TEST_DOMAIN=example.com \
//!     cargo test -p dns-sweeper-provider --test cloudflare_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use common::TestContext;
use dns_sweeper_provider::ProviderError;

#[tokio::test]
#[ignore]
async fn test_cloudflare_resolve_zone_id() {
    skip_if_no_credentials!("CLOUDFLARE_API_TOKEN", "TEST_DOMAIN");

    let ctx = TestContext::cloudflare().expect("创建测试上下文失败");
    let result = ctx.provider.resolve_zone_id(&ctx.zone_name).await;

    assert!(result.is_ok(), "resolve_zone_id 调用失败: {result:?}");
    assert!(!result.unwrap().is_empty(), "zone ID 不应为空");
}

#[tokio::test]
#[ignore]
async fn test_cloudflare_resolve_unknown_zone() {
    skip_if_no_credentials!("CLOUDFLARE_API_TOKEN", "TEST_DOMAIN");

    let ctx = TestContext::cloudflare().expect("创建测试上下文失败");
    let result = ctx
        .provider
        .resolve_zone_id("sweeper-test-zone-that-does-not-exist.invalid")
        .await;

    assert!(
        matches!(result, Err(ProviderError::DomainNotFound { .. })),
        "未知区域应返回 DomainNotFound: {result:?}"
    );
}

#[tokio::test]
#[ignore]
async fn test_cloudflare_list_records_for_missing_name_is_empty() {
    skip_if_no_credentials!("CLOUDFLARE_API_TOKEN", "TEST_DOMAIN");

    let ctx = TestContext::cloudflare().expect("创建测试上下文失败");
    let zone_id = ctx
        .provider
        .resolve_zone_id(&ctx.zone_name)
        .await
        .expect("解析 zone ID 失败");

    let records = ctx
        .provider
        .list_records(&zone_id, &ctx.missing_hostname())
        .await
        .expect("list_records 调用失败");

    assert!(records.is_empty(), "不存在的主机名不应有记录");
}

#[tokio::test]
#[ignore]
async fn test_cloudflare_list_records_for_apex() {
    skip_if_no_credentials!("CLOUDFLARE_API_TOKEN", "TEST_DOMAIN");

    let ctx = TestContext::cloudflare().expect("创建测试上下文失败");
    let zone_id = ctx
        .provider
        .resolve_zone_id(&ctx.zone_name)
        .await
        .expect("解析 zone ID 失败");

    let records = ctx
        .provider
        .list_records(&zone_id, &ctx.zone_name)
        .await
        .expect("list_records 调用失败");

    for record in &records {
        assert_eq!(record.name, ctx.zone_name, "记录名称应与查询名称完全一致");
        assert_eq!(record.zone_id, zone_id);
    }
    println!("✓ apex 共 {} 条记录", records.len());
}

#[tokio::test]
#[ignore]
async fn test_cloudflare_delete_missing_record_fails() {
    skip_if_no_credentials!("CLOUDFLARE_API_TOKEN", "TEST_DOMAIN");

    let ctx = TestContext::cloudflare().expect("创建测试上下文失败");
    let zone_id = ctx
        .provider
        .resolve_zone_id(&ctx.zone_name)
        .await
        .expect("解析 zone ID 失败");

    let result = ctx
        .provider
        .delete_record(&zone_id, "00000000000000000000000000000000")
        .await;

    assert!(result.is_err(), "删除不存在的记录应失败");
}
