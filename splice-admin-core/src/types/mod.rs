//! 类型定义模块

mod form_mode;
mod notification;

pub use form_mode::FormMode;
pub use notification::{Notification, Severity};

// Re-export API 库的公共类型
pub use splice_admin_api::{
    Adgroup, AdgroupPayload, AdgroupType, ApiError, Channel, ReferenceData, SavedEntity,
};
