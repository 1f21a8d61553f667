use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Adgroup, AdgroupPayload, Channel, ReferenceData, SavedEntity};

/// Admin API 抽象
///
/// 前端只通过此 trait 访问后端，便于在测试中替换为 mock 实现。
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// 获取单个 ad group
    async fn get_adgroup(&self, id: i64) -> Result<Adgroup>;

    /// 创建 ad group（只发送一次，不重试）
    async fn create_adgroup(&self, payload: &AdgroupPayload) -> Result<SavedEntity>;

    /// 更新 ad group（只发送一次，不重试）
    async fn update_adgroup(&self, id: i64, payload: &AdgroupPayload) -> Result<SavedEntity>;

    /// 获取渠道列表
    async fn list_channels(&self) -> Result<Vec<Channel>>;

    /// 获取分类列表
    async fn list_categories(&self) -> Result<Vec<String>>;

    /// 获取语言区域列表
    async fn list_locales(&self) -> Result<Vec<String>>;

    /// 并发获取表单所需的全部参考数据
    async fn reference_data(&self) -> Result<ReferenceData> {
        let (categories, channels, locales) = futures::try_join!(
            self.list_categories(),
            self.list_channels(),
            self.list_locales()
        )?;
        Ok(ReferenceData {
            categories,
            channels,
            locales,
        })
    }
}
