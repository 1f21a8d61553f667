//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含数据结构和简单的查询/变更方法，不发起任何网络请求。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod navigation;     // 路由历史栈
//!
//!         pub mod state;      // 页面数据状态
//!
//!     路由本身（Route）定义在 splice-admin-core 中：
//!         - Route 相当于房间的门牌号，只负责标识位置；
//!         - State 是各个页面的数据容器（表单草稿、详情、输入框内容等）。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,                  // 退出标志
//!             pub history: NavigationHistory,         // 路由历史（栈顶即当前页面）
//!             pub dirty: bool,                        // 是否有未保存的修改
//!             pub notification: Option<Notification>, // 成功/错误提示
//!             pub saving: bool,                       // 提交进行中（显示 spinner）
//!             pub reference: ReferenceState,          // 渠道/分类/语言区域
//!             pub home / form / detail,               // 各页面状态
//!             pub modal: ModalState,                  // 弹窗状态
//!         }
//!
//!     dirty 与 notification 只由 update 修改：
//!         - 字段修改 → mark_dirty()，仅在 clean → dirty 时返回 true（changed 信号）
//!         - 保存成功 → dirty = false
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         Modal 枚举：
//!             - ConfirmDiscard { pending, focus }   离开未保存表单时的确认
//!             - Help                                快捷键帮助
//!
//!
//! Model 层的数据被 Update 层修改，然后被 View 层读取并渲染成 UI。
//!

mod app;
mod navigation;
pub mod state;

pub use app::App;
pub use navigation::NavigationHistory;
pub use state::{
    AdgroupDetailState, AdgroupFormState, DiscardFocus, HomeState, Modal, ModalState,
    PendingAction, ReferenceState,
};
