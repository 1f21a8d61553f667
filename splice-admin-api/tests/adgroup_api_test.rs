//! Admin API 集成测试
//!
//! 运行方式:
//! ```bash
//! SPLICE_ADMIN_TEST_API_URL=http://localhost:5000/api SPLICE_ADMIN_TEST_CAMPAIGN_ID=1 \
//!     cargo test -p splice-admin-api --test adgroup_api_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use std::time::Duration;

use common::{TestContext, directory_payload};
use splice_admin_api::{AdminApi, ApiError, ClientConfig, SpliceClient};

// ============ 离线测试 ============

#[tokio::test]
async fn test_unreachable_api_is_transport_error() {
    let mut config = ClientConfig::new("http://127.0.0.1:9/api");
    config.connect_timeout = Duration::from_millis(500);
    config.request_timeout = Duration::from_secs(1);
    config.max_retries = 0;
    let client = require_ok!(SpliceClient::new(config));

    let err = client
        .create_adgroup(&directory_payload(1, 1, "en-US"))
        .await
        .unwrap_err();

    assert!(err.is_transport(), "unexpected error: {err:?}");
    assert!(err.to_string().contains("POST /adgroups"));
}

#[test]
fn test_invalid_base_url_is_rejected_up_front() {
    let err = SpliceClient::new(ClientConfig::new("not a url")).err();
    assert!(matches!(err, Some(ApiError::InvalidBaseUrl { .. })));
}

// ============ 在线测试 ============

#[tokio::test]
#[ignore = "integration test: requires SPLICE_ADMIN_TEST_API_URL and SPLICE_ADMIN_TEST_CAMPAIGN_ID"]
async fn test_reference_data() {
    skip_if_no_api!("SPLICE_ADMIN_TEST_API_URL", "SPLICE_ADMIN_TEST_CAMPAIGN_ID");

    let Some(ctx) = TestContext::from_env() else {
        return;
    };
    let reference = require_ok!(ctx.client.reference_data().await, "reference_data 调用失败");
    assert!(!reference.channels.is_empty(), "渠道列表不应为空");
    assert!(!reference.locales.is_empty(), "语言区域列表不应为空");

    println!(
        "✓ reference_data 测试通过: {} channels, {} categories, {} locales",
        reference.channels.len(),
        reference.categories.len(),
        reference.locales.len()
    );
}

#[tokio::test]
#[ignore = "integration test: requires SPLICE_ADMIN_TEST_API_URL and SPLICE_ADMIN_TEST_CAMPAIGN_ID"]
async fn test_create_then_update_adgroup() {
    skip_if_no_api!("SPLICE_ADMIN_TEST_API_URL", "SPLICE_ADMIN_TEST_CAMPAIGN_ID");

    let Some(ctx) = TestContext::from_env() else {
        return;
    };
    let reference = require_ok!(ctx.client.reference_data().await);
    let (Some(channel), Some(locale)) = (reference.channels.first(), reference.locales.first())
    else {
        eprintln!("跳过测试: 没有可用的渠道或语言区域");
        return;
    };

    let mut payload = directory_payload(ctx.campaign_id, channel.id, locale);
    let created = require_ok!(ctx.client.create_adgroup(&payload).await, "创建失败");

    payload.paused = true;
    let updated = require_ok!(
        ctx.client.update_adgroup(created.id, &payload).await,
        "更新失败"
    );
    assert_eq!(updated.id, created.id);

    let fetched = require_ok!(ctx.client.get_adgroup(created.id).await, "获取失败");
    assert_eq!(fetched.name, payload.name);
    assert!(fetched.paused);

    println!("✓ create/update 测试通过 (id = {})", created.id);
}

#[tokio::test]
#[ignore = "integration test: requires SPLICE_ADMIN_TEST_API_URL and SPLICE_ADMIN_TEST_CAMPAIGN_ID"]
async fn test_missing_adgroup_is_not_found() {
    skip_if_no_api!("SPLICE_ADMIN_TEST_API_URL", "SPLICE_ADMIN_TEST_CAMPAIGN_ID");

    let Some(ctx) = TestContext::from_env() else {
        return;
    };
    let err = ctx.client.get_adgroup(i64::MAX).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }), "unexpected error: {err:?}");
}
