//! 页面视图

pub mod adgroup_detail;
pub mod adgroup_form;
pub mod home;
