//! 应用主消息枚举

use splice_admin_core::Route;

use super::{FormMessage, HomeMessage, ModalMessage, ResponseMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用（表单有未保存修改时先确认）
    Quit,

    /// 强制退出（Ctrl+C）
    ForceQuit,

    /// 进入指定路由
    Navigate(Route),

    /// 返回上一页
    GoBack,

    /// 重新加载参考数据
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 首页相关消息
    Home(HomeMessage),

    /// 表单相关消息
    Form(FormMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台请求结果
    Response(ResponseMessage),

    /// 定时刷新（spinner 动画）
    Tick,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}

impl AppMessage {
    /// 是否来自用户操作（用户操作会清除已显示过的提示）
    pub fn is_user_action(&self) -> bool {
        !matches!(self, Self::Response(_) | Self::Tick | Self::Noop)
    }
}
