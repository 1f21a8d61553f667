//! 通用组件

pub mod modal;
pub mod notification;
pub mod statusbar;
pub mod text;
