//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!         pub use keymap::DefaultKeymap;    // 帮助弹窗也要读取
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 app.rs 调用，最长等待 timeout
//!         · handle_event    把 crossterm 事件翻译成 AppMessage
//!
//!
//!     翻译顺序：
//!         1. 只处理 Press 事件
//!         2. Ctrl+C 无论如何都是强制退出
//!         3. 有弹窗时，按键全部交给弹窗
//!         4. 全局快捷键（Alt+q / Alt+h / Alt+r / Esc）
//!         5. 按当前路由交给页面：首页、详情页、表单页
//!
//!     handle_event 只读取 &App，不修改状态；
//!     修改状态是 update 层的事。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::DefaultKeymap;
