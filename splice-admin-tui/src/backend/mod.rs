//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责所有的网络访问。
//! 通过 splice-admin-core 的服务访问 Splice admin API。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件加载（JSON）
//!         mod core_service;       // 核心服务入口，封装 splice-admin-core 的服务
//!         mod executor;           // Command 执行器：在 tokio 运行时上执行请求
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、Command
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     update() 不直接发起请求，而是返回 Vec<Command>：
//!         - LoadReferenceData          拉取渠道/分类/语言区域
//!         - LoadAdgroup(id)            拉取单个 ad group
//!         - Submit { mode, payload }   创建或更新（只发送一次）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户按 Enter 提交表单
//!         ↓
//!     update 校验草稿，通过后设置 saving = true，返回 Command::Submit
//!         ↓
//!     主循环把 Command 交给 Backend::dispatch()
//!         ↓
//!     Backend 在 tokio 运行时上 spawn 任务，调用 CoreService
//!         ↓
//!     任务完成后通过 channel 发回 AppMessage::Response(SubmitFinished { .. })
//!         ↓
//!     主循环下一轮取出消息，交给 update 处理（提示、跳转）
//!

mod config_service;
mod core_service;
mod executor;

pub use config_service::AppConfig;
pub use core_service::CoreService;
pub use executor::Backend;

use splice_admin_core::types::{AdgroupPayload, FormMode};

/// update 返回的副作用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 拉取表单选择器的参考数据
    LoadReferenceData,
    /// 拉取 ad group
    LoadAdgroup(i64),
    /// 提交表单
    Submit {
        mode: FormMode,
        payload: AdgroupPayload,
    },
}
