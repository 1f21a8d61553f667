//! Ad group 详情页面状态

use splice_admin_core::types::Adgroup;

/// 详情页面状态
#[derive(Debug, Clone, Default)]
pub struct AdgroupDetailState {
    /// 正在显示的 ad group id
    pub id: Option<i64>,
    pub adgroup: Option<Adgroup>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AdgroupDetailState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 开始加载 `id`（清除旧数据）
    pub fn begin_load(&mut self, id: i64) {
        self.id = Some(id);
        self.adgroup = None;
        self.loading = true;
        self.error = None;
    }

    /// 是否在等待 `id` 的数据
    pub fn awaits(&self, id: i64) -> bool {
        self.loading && self.id == Some(id)
    }

    pub fn loaded(&mut self, adgroup: Adgroup) {
        self.adgroup = Some(adgroup);
        self.loading = false;
    }

    pub fn failed(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }
}
