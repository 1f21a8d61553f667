//! Command 执行器
//!
//! 主循环是同步的，请求在 tokio 运行时上异步执行，
//! 结果通过 channel 发回主循环。

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::{Command, CoreService};
use crate::message::AppMessage;

/// 后台执行器
pub struct Backend {
    handle: Handle,
    services: Arc<CoreService>,
    tx: UnboundedSender<AppMessage>,
}

impl Backend {
    /// 创建执行器，返回结果接收端
    pub fn new(handle: Handle, services: CoreService) -> (Self, UnboundedReceiver<AppMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let backend = Self {
            handle,
            services: Arc::new(services),
            tx,
        };
        (backend, rx)
    }

    /// 执行一批命令（不阻塞）
    pub fn dispatch(&self, commands: Vec<Command>) {
        for command in commands {
            log::debug!("Dispatching {command:?}");
            let services = self.services.clone();
            let tx = self.tx.clone();
            self.handle.spawn(async move {
                let msg = services.execute(command).await;
                // 接收端关闭说明应用正在退出
                if tx.send(msg).is_err() {
                    log::debug!("Dropped response after shutdown");
                }
            });
        }
    }
}
