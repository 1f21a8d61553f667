//! 参考数据状态（渠道、分类、语言区域）

use splice_admin_core::types::{Channel, ReferenceData};

/// 参考数据加载状态
///
/// 数据到达前表单选择器显示 "loading"。
#[derive(Debug, Clone, Default)]
pub struct ReferenceState {
    pub data: Option<ReferenceData>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ReferenceState {
    pub fn channels(&self) -> &[Channel] {
        self.data.as_ref().map_or(&[], |d| d.channels.as_slice())
    }

    pub fn categories(&self) -> &[String] {
        self.data.as_ref().map_or(&[], |d| d.categories.as_slice())
    }

    pub fn locales(&self) -> &[String] {
        self.data.as_ref().map_or(&[], |d| d.locales.as_slice())
    }

    /// 渠道显示名；未知 id 显示为 `#id`
    pub fn channel_label(&self, id: i64) -> String {
        self.data
            .as_ref()
            .and_then(|d| d.channel_name(id))
            .map_or_else(|| format!("#{id}"), str::to_string)
    }
}
