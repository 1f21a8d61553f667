//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 &App，把状态画到终端上，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局：标题栏 + 提示 + 页面 + 状态栏
//!         mod components;         // 状态栏、提示横幅、弹窗
//!         mod pages;              // 首页、表单页、详情页
//!         pub mod theme;          // 主题颜色（配置决定深色/浅色）
//!
//!
//!     渲染顺序（后画的在上层）：
//!         标题栏 → 提示横幅 → 页面内容 → 状态栏 → 弹窗
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
