//! 首页状态：路由输入框

/// 首页状态
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    /// 输入的路由路径
    pub input: String,
    /// 解析失败的提示
    pub error: Option<String>,
}

impl HomeState {
    pub fn new() -> Self {
        Self::default()
    }
}
