//! 首页消息

/// 首页（路由输入框）消息
#[derive(Debug, Clone)]
pub enum HomeMessage {
    /// 输入字符
    Input(char),
    /// 删除字符
    Backspace,
    /// 解析输入并跳转
    Confirm,
}
