//! 核心服务
//!
//! 封装 splice-admin-core 的各种服务，
//! 提供给 TUI 层使用的统一接口

use std::sync::Arc;

use splice_admin_core::services::{AdgroupService, ReferenceDataService};
use splice_admin_core::{AdminApi, CoreResult, ServiceContext, SpliceClient};

use super::{AppConfig, Command};
use crate::message::{AppMessage, ResponseMessage};

/// TUI 核心服务
///
/// 持有服务上下文，提供给 Backend 调用
pub struct CoreService {
    /// 服务上下文（供各服务使用）
    ctx: Arc<ServiceContext>,
}

impl CoreService {
    /// 按配置创建 HTTP 客户端
    pub fn new(config: &AppConfig) -> CoreResult<Self> {
        let client = SpliceClient::new(config.client_config())?;
        log::info!("Using Splice admin API at {}", client.base_url());
        Ok(Self::with_api(Arc::new(client)))
    }

    /// 注入任意 API 实现
    pub fn with_api(api: Arc<dyn AdminApi>) -> Self {
        Self {
            ctx: Arc::new(ServiceContext::new(api)),
        }
    }

    /// 获取 ad group 服务
    pub fn adgroup(&self) -> AdgroupService {
        AdgroupService::new(self.ctx.clone())
    }

    /// 获取参考数据服务
    pub fn reference_data(&self) -> ReferenceDataService {
        ReferenceDataService::new(self.ctx.clone())
    }

    /// 执行一个命令，把结果包装成消息
    pub async fn execute(&self, command: Command) -> AppMessage {
        let response = match command {
            Command::LoadReferenceData => {
                ResponseMessage::ReferenceDataLoaded(self.reference_data().load().await)
            }
            Command::LoadAdgroup(id) => ResponseMessage::AdgroupLoaded {
                id,
                result: self.adgroup().get_adgroup(id).await,
            },
            Command::Submit { mode, payload } => ResponseMessage::SubmitFinished {
                mode,
                result: self.adgroup().submit(mode, &payload).await,
            },
        };
        AppMessage::Response(response)
    }
}
