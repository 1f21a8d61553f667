//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// 关闭弹窗（等同于取消）
    Close,

    /// 确认当前焦点按钮
    Confirm,

    /// 在确认弹窗中切换按钮焦点
    ToggleFocus,
}
