//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod adgroup_detail;
mod adgroup_form;
mod home;
mod modal;
mod reference;

pub use adgroup_detail::AdgroupDetailState;
pub use adgroup_form::AdgroupFormState;
pub use home::HomeState;
pub use modal::{DiscardFocus, Modal, ModalState, PendingAction};
pub use reference::ReferenceState;
