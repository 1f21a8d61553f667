//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod form;               // 表单编辑与提交
//!         mod home;               // 首页路由输入
//!         mod modal;              // 弹窗（丢弃确认、帮助）
//!         mod navigation;         // 路由切换与未保存修改保护
//!         mod response;           // 后台请求结果
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Vec<Command> {...}
//!
//!
//!     update 不做 I/O。需要访问 API 时返回 Command，
//!     由主循环交给 Backend 执行，结果以 AppMessage::Response 回到这里。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 提示的生命周期
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     notify()                    创建提示（shown = false）
//!         ↓
//!     View 渲染后                  mark_notification_shown()
//!         ↓
//!     下一个用户操作               dismiss_shown_notification()
//!
//!     后台结果、Tick 不算用户操作，所以提示不会在渲染前被清掉。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod form;
mod home;
mod modal;
mod navigation;
mod response;

use crate::backend::Command;
use crate::message::AppMessage;
use crate::model::{App, PendingAction};

/// 启动时的初始命令：加载参考数据并进入初始路由
pub fn init(app: &mut App) -> Vec<Command> {
    app.reference.loading = true;
    let mut commands = vec![Command::LoadReferenceData];
    commands.extend(navigation::enter(app, app.route()));
    commands
}

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Vec<Command> {
    if msg.is_user_action() {
        app.dismiss_shown_notification();
    }

    match msg {
        AppMessage::ForceQuit => {
            app.should_quit = true;
            Vec::new()
        }

        AppMessage::Quit => navigation::request(app, PendingAction::Quit),

        AppMessage::Navigate(route) => navigation::request(app, PendingAction::Navigate(route)),

        AppMessage::GoBack => {
            // 如果有弹窗打开，先关闭弹窗
            if app.modal.is_open() {
                app.modal.close();
                Vec::new()
            } else {
                navigation::request(app, PendingAction::Back)
            }
        }

        AppMessage::Refresh => {
            app.reference.loading = true;
            app.reference.error = None;
            let mut commands = vec![Command::LoadReferenceData];
            if let splice_admin_core::Route::AdgroupDetail { id } = app.route() {
                app.detail.begin_load(id);
                commands.push(Command::LoadAdgroup(id));
            }
            commands
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
            Vec::new()
        }

        AppMessage::Home(home_msg) => home::update(app, home_msg),

        AppMessage::Form(form_msg) => form::update(app, form_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Response(response_msg) => response::update(app, response_msg),

        AppMessage::Tick => {
            app.tick = app.tick.wrapping_add(1);
            Vec::new()
        }

        AppMessage::Noop => Vec::new(),
    }
}
