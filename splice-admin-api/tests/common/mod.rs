//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::env;

use splice_admin_api::{AdgroupPayload, AdgroupType, ClientConfig, SpliceClient};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_api {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(res.is_ok(), "{}: {res:?}", format_args!($($msg)+));
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 测试上下文 - 封装客户端和测试用的 campaign
pub struct TestContext {
    pub client: SpliceClient,
    pub campaign_id: i64,
}

impl TestContext {
    /// 从环境变量创建：`SPLICE_ADMIN_TEST_API_URL`, `SPLICE_ADMIN_TEST_CAMPAIGN_ID`
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("SPLICE_ADMIN_TEST_API_URL").ok()?;
        let campaign_id = env::var("SPLICE_ADMIN_TEST_CAMPAIGN_ID").ok()?.parse().ok()?;
        let client = SpliceClient::new(ClientConfig::new(base_url)).ok()?;
        Some(Self {
            client,
            campaign_id,
        })
    }
}

/// 生成唯一的测试 ad group 名称
pub fn generate_test_adgroup_name() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or_default();
    format!("_test-{nanos:08x}")
}

/// 构造一个 directory 类型的最小 payload
pub fn directory_payload(campaign_id: i64, channel_id: i64, locale: &str) -> AdgroupPayload {
    AdgroupPayload {
        name: generate_test_adgroup_name(),
        kind: AdgroupType::Directory,
        campaign_id,
        channel_id,
        locale: locale.to_string(),
        categories: BTreeSet::new(),
        frequency_cap_daily: None,
        frequency_cap_total: None,
        paused: false,
        explanation: None,
        check_inadjacency: false,
    }
}
