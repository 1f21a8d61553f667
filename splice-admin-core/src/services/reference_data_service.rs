//! 表单参考数据（渠道、分类、语言区域）

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::ReferenceData;

/// 参考数据服务
pub struct ReferenceDataService {
    ctx: Arc<ServiceContext>,
}

impl ReferenceDataService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 并发拉取三类参考数据，并整理为选择器使用的顺序
    ///
    /// 分类与语言区域排序去重；渠道按名称排序，保留重复名称。
    pub async fn load(&self) -> CoreResult<ReferenceData> {
        let mut data = self.ctx.api.reference_data().await.map_err(|e| {
            let err = CoreError::from(e);
            ServiceContext::log_failure("Load reference data", &err);
            err
        })?;

        data.categories.sort();
        data.categories.dedup();
        data.locales.sort();
        data.locales.dedup();
        data.channels
            .sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        log::debug!(
            "Loaded reference data: {} channels, {} categories, {} locales",
            data.channels.len(),
            data.categories.len(),
            data.locales.len()
        );
        Ok(data)
    }
}
