//! 业务逻辑服务层

mod adgroup_service;
mod reference_data_service;

pub use adgroup_service::AdgroupService;
pub use reference_data_service::ReferenceDataService;

use std::sync::Arc;

use crate::error::CoreError;
use crate::traits::AdminApi;

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入具体的 API 实现（HTTP 客户端或测试 mock）。
pub struct ServiceContext {
    /// Admin API
    pub api: Arc<dyn AdminApi>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(api: Arc<dyn AdminApi>) -> Self {
        Self { api }
    }

    /// 按错误性质选择日志级别：预期内的错误记 warn，其余记 error
    pub(crate) fn log_failure(operation: &str, err: &CoreError) {
        if err.is_expected() {
            log::warn!("{operation} failed: {err}");
        } else {
            log::error!("{operation} failed: {err}");
        }
    }
}
