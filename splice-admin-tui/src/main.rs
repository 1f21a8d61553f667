//! Splice Admin TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     Cli::parse()            // 命令行参数
//!     AppConfig::load()       // 配置文件 + 环境变量
//!     init_logging()          // 文件日志
//!     Runtime::new()          // tokio 运行时，只用于网络请求
//!     init_terminal()         // 初始化终端
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use splice_admin_core::Route;

use backend::{AppConfig, Backend, CoreService};
use util::{init_logging, init_terminal, install_panic_hook, restore_terminal};

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "splice-admin", version, about = "Terminal admin for Splice ad groups")]
struct Cli {
    /// Config file (default: <config dir>/splice-admin/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Route to open, e.g. /adgroups/42/edit
    #[arg(short, long, default_value = "/")]
    route: Route,

    /// Override the API base URL
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. 加载配置
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }
    view::theme::set_theme(config.theme);

    // 2. 初始化日志（guard 持有到 main 结束）
    let _log_guard = init_logging(&config.log_dir())?;
    tracing::info!("Starting splice-admin at {}", cli.route);

    // 3. 创建 tokio 运行时与后台服务
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let services = CoreService::new(&config)?;
    let (backend, mut responses) = Backend::new(runtime.handle().clone(), services);

    // 4. 初始化终端
    install_panic_hook();
    let mut terminal = init_terminal()?;

    // 5. 运行主循环
    let mut app = model::App::new(cli.route);
    let result = app::run(&mut terminal, &mut app, &backend, &mut responses);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        tracing::error!("Exited with error: {e:#}");
    } else {
        tracing::info!("Bye");
    }
    result
}
