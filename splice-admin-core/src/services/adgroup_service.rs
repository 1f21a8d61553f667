//! Ad group 读取与提交服务

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{Adgroup, AdgroupPayload, FormMode, SavedEntity};

/// Ad group 服务
pub struct AdgroupService {
    ctx: Arc<ServiceContext>,
}

impl AdgroupService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 获取 ad group 详情
    pub async fn get_adgroup(&self, id: i64) -> CoreResult<Adgroup> {
        self.ctx.api.get_adgroup(id).await.map_err(|e| {
            let err = CoreError::from(e);
            ServiceContext::log_failure(&format!("Load adgroup {id}"), &err);
            err
        })
    }

    /// 提交表单：按模式发出恰好一次 create 或 update 请求
    pub async fn submit(&self, mode: FormMode, payload: &AdgroupPayload) -> CoreResult<SavedEntity> {
        let result = match mode {
            FormMode::Create { .. } => self.ctx.api.create_adgroup(payload).await,
            FormMode::Edit { id } => self.ctx.api.update_adgroup(id, payload).await,
        };

        match result {
            Ok(saved) => {
                log::info!(
                    "{} adgroup {} ({})",
                    if mode.is_edit() { "Updated" } else { "Created" },
                    saved.id,
                    payload.name
                );
                Ok(saved)
            }
            Err(e) => {
                let err = CoreError::from(e);
                ServiceContext::log_failure(&format!("{} adgroup", mode.action_label()), &err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_adgroup_service, test_adgroup, test_payload};
    use crate::types::ApiError;

    #[tokio::test]
    async fn create_mode_issues_exactly_one_create() {
        let (svc, api) = create_test_adgroup_service();
        api.set_create_response(Ok(SavedEntity { id: 7 })).await;

        let saved = svc
            .submit(FormMode::Create { campaign_id: 3 }, &test_payload())
            .await
            .unwrap();

        assert_eq!(saved.id, 7);
        assert_eq!(api.create_calls().await, 1);
        assert_eq!(api.update_calls().await, 0);
        assert_eq!(api.last_payload().await, Some(test_payload()));
    }

    #[tokio::test]
    async fn edit_mode_issues_exactly_one_update_with_id() {
        let (svc, api) = create_test_adgroup_service();
        api.set_update_response(Ok(SavedEntity { id: 42 })).await;

        let saved = svc
            .submit(FormMode::Edit { id: 42 }, &test_payload())
            .await
            .unwrap();

        assert_eq!(saved.id, 42);
        assert_eq!(api.create_calls().await, 0);
        assert_eq!(api.update_calls().await, 1);
        assert_eq!(api.last_update_id().await, Some(42));
    }

    #[tokio::test]
    async fn rejection_is_not_retried() {
        let (svc, api) = create_test_adgroup_service();
        api.set_create_response(Err(ApiError::Rejected {
            status: 400,
            message: "bad locale".to_string(),
        }))
        .await;

        let err = svc
            .submit(FormMode::Create { campaign_id: 3 }, &test_payload())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "bad locale");
        assert_eq!(api.create_calls().await, 1);
    }

    #[tokio::test]
    async fn transport_failure_surfaces_as_error() {
        let (svc, api) = create_test_adgroup_service();
        api.set_update_response(Err(ApiError::NetworkError {
            endpoint: "PUT /adgroups/1".to_string(),
            detail: "connection refused".to_string(),
        }))
        .await;

        let err = svc
            .submit(FormMode::Edit { id: 1 }, &test_payload())
            .await
            .unwrap_err();

        assert!(!err.is_expected());
        assert_eq!(api.update_calls().await, 1);
    }

    #[tokio::test]
    async fn get_adgroup_returns_stored_record() {
        let (svc, api) = create_test_adgroup_service();
        api.insert_adgroup(test_adgroup(5)).await;

        let adgroup = svc.get_adgroup(5).await.unwrap();
        assert_eq!(adgroup.id, 5);
    }

    #[tokio::test]
    async fn get_missing_adgroup_is_not_found() {
        let (svc, _api) = create_test_adgroup_service();
        let err = svc.get_adgroup(99).await.unwrap_err();
        assert!(matches!(err, CoreError::Api(ApiError::NotFound { .. })));
    }
}
