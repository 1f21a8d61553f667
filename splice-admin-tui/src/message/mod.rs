//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁
//! 所有的用户操作、后台请求结果都通过 Message 来表达。
//! Update 层根据 Message 来更新 Model，并返回需要执行的 Command。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod form;           // 表单页面子消息
//!         mod home;           // 首页（路由输入）子消息
//!         mod modal;          // 弹窗子消息
//!         mod response;       // Backend 返回的请求结果
//!
//!
//!     消息来源有两个：
//!         · event/handler.rs   把按键翻译成 AppMessage
//!         · backend            异步请求完成后，通过 channel 发回 AppMessage::Response(...)
//!
//!     两者都在主循环（app.rs）中交给 update::update() 处理，
//!     所以请求结果的处理永远发生在请求发出之后、且与按键处理串行。
//!

mod app;
mod form;
mod home;
mod modal;
mod response;

pub use app::AppMessage;
pub use form::FormMessage;
pub use home::HomeMessage;
pub use modal::ModalMessage;
pub use response::ResponseMessage;
