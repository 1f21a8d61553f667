//! 弹窗/对话框状态

use splice_admin_core::Route;

/// 确认丢弃修改后要继续执行的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    /// 进入新路由
    Navigate(Route),
    /// 返回上一页
    Back,
    /// 退出应用
    Quit,
}

/// 确认弹窗中的按钮焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscardFocus {
    Discard,
    /// 默认停在“取消”，避免误丢弃
    #[default]
    Cancel,
}

impl DiscardFocus {
    pub fn toggle(self) -> Self {
        match self {
            Self::Discard => Self::Cancel,
            Self::Cancel => Self::Discard,
        }
    }
}

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 离开有未保存修改的表单
    ConfirmDiscard {
        pending: PendingAction,
        focus: DiscardFocus,
    },
    /// 帮助
    Help,
}

/// 弹窗状态
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示丢弃确认弹窗
    pub fn show_confirm_discard(&mut self, pending: PendingAction) {
        self.active = Some(Modal::ConfirmDiscard {
            pending,
            focus: DiscardFocus::default(),
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}
