//! 后台请求结果消息

use splice_admin_core::types::{Adgroup, FormMode, ReferenceData, SavedEntity};
use splice_admin_core::CoreError;

/// Backend 执行 Command 后发回的结果
#[derive(Debug, Clone)]
pub enum ResponseMessage {
    /// 参考数据加载完成
    ReferenceDataLoaded(Result<ReferenceData, CoreError>),

    /// Ad group 加载完成
    AdgroupLoaded {
        id: i64,
        result: Result<Adgroup, CoreError>,
    },

    /// 表单提交完成
    SubmitFinished {
        mode: FormMode,
        result: Result<SavedEntity, CoreError>,
    },
}
