//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))       // 渲染 UI
//!     app.mark_notification_shown()                   // 提示已经显示给用户
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!
//!     while let Ok(msg) = rx.try_recv() {             // 取出后台请求的结果
//!         let cmds = update::update(&mut app, msg);
//!         backend.dispatch(cmds);
//!     }
//!
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event, &app);            // 接收原始事件并翻译为消息
//!         let cmds = update::update(&mut app, msg);       // 更新状态
//!         backend.dispatch(cmds);                         // 执行副作用
//!     } else {
//!         update::update(&mut app, Tick)                  // 无输入：推进 spinner
//!     }
//! }
//!
//! 渲染、输入、状态更新都在这一个线程里；
//! 只有网络请求在 tokio 运行时上执行。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::Backend;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询超时
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    backend: &Backend,
    responses: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    backend.dispatch(update::init(app));

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;
        app.mark_notification_shown();

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 处理后台结果
        while let Ok(msg) = responses.try_recv() {
            backend.dispatch(update::update(app, msg));
        }

        // 4. 轮询事件（100ms 超时）
        let msg = match event::poll_event(POLL_TIMEOUT)? {
            Some(event) => event::handle_event(event, app),
            None => AppMessage::Tick,
        };

        // 5. 更新状态并执行副作用
        backend.dispatch(update::update(app, msg));
    }

    Ok(())
}
