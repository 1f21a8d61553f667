//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//! 终端的初始化和恢复，以及日志。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 文件日志（tracing + tracing-appender）
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     终端：
//!         · Raw Mode（原始模式）
//!             - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!             - 关闭字符回显：按键不会显示在终端上
//!             - 捕获所有按键：包括 Ctrl+C、箭头键等特殊键
//!
//!         · Alternate Screen（备用屏幕）
//!             - TUI 应用在备用屏幕运行
//!             - 退出后自动恢复主屏幕内容
//!
//!         注意：无论程序是正常退出还是发生错误，都必须调用 restore_terminal()！
//!               发生 panic 时由 install_panic_hook() 注册的钩子负责恢复。
//!
//!
//!     日志：
//!         终端被 TUI 占用，日志写入文件（按天滚动）。
//!         core/api 库使用 log 门面，tracing-subscriber 默认启用 tracing-log，
//!         init 时会把 log 记录桥接过来。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, install_panic_hook, restore_terminal, Term};
