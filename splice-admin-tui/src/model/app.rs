//! 应用主状态结构

use splice_admin_core::types::Notification;
use splice_admin_core::Route;

use super::{
    AdgroupDetailState, AdgroupFormState, HomeState, ModalState, NavigationHistory,
    ReferenceState,
};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 路由历史，栈顶为当前页面
    pub history: NavigationHistory,

    /// 是否有未保存的修改
    pub dirty: bool,

    /// 成功/错误提示
    pub notification: Option<Notification>,

    /// 提交进行中
    pub saving: bool,

    /// spinner 帧计数
    pub tick: usize,

    /// 表单选择器的参考数据
    pub reference: ReferenceState,

    // === 各页面状态 ===
    /// 首页状态
    pub home: HomeState,
    /// 表单页面状态
    pub form: AdgroupFormState,
    /// 详情页面状态
    pub detail: AdgroupDetailState,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 创建新的应用实例
    ///
    /// 只设置初始路由；进入路由的副作用（加载数据、绑定表单）由 update 负责。
    pub fn new(initial: Route) -> Self {
        Self {
            should_quit: false,
            history: NavigationHistory::new(initial),
            dirty: false,
            notification: None,
            saving: false,
            tick: 0,
            reference: ReferenceState::default(),
            home: HomeState::new(),
            form: AdgroupFormState::new(),
            detail: AdgroupDetailState::new(),
            modal: ModalState::new(),
        }
    }

    /// 当前路由
    pub fn route(&self) -> Route {
        self.history.current()
    }

    /// 标记有未保存的修改
    ///
    /// 只在 clean → dirty 时返回 `true`，即每个编辑周期内 changed 信号只触发一次。
    pub fn mark_dirty(&mut self) -> bool {
        if self.dirty {
            return false;
        }
        self.dirty = true;
        true
    }

    /// 当前页面是否是有未保存修改的表单
    pub fn has_unsaved_form(&self) -> bool {
        self.dirty && self.route().form_mode().is_some()
    }

    /// 设置提示
    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    /// 渲染完成后调用：新提示标记为已显示
    pub fn mark_notification_shown(&mut self) {
        if let Some(notification) = self.notification.as_mut() {
            notification.mark_shown();
        }
    }

    /// 用户操作后清除已显示过的提示
    pub fn dismiss_shown_notification(&mut self) {
        if self.notification.as_ref().is_some_and(|n| n.shown) {
            self.notification = None;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}
