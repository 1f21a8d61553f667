//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::services::{AdgroupService, ServiceContext};
use crate::traits::AdminApi;
use crate::types::{
    Adgroup, AdgroupPayload, AdgroupType, ApiError, Channel, SavedEntity,
};

type ApiResult<T> = std::result::Result<T, ApiError>;

// ===== MockAdminApi =====

#[derive(Default)]
struct CallLog {
    create: usize,
    update: usize,
    last_update_id: Option<i64>,
    last_payload: Option<AdgroupPayload>,
}

pub struct MockAdminApi {
    adgroups: RwLock<HashMap<i64, Adgroup>>,
    /// 如果 Some，create 返回此结果；否则返回 id = 1
    create_response: RwLock<Option<ApiResult<SavedEntity>>>,
    /// 如果 Some，update 返回此结果；否则回显请求的 id
    update_response: RwLock<Option<ApiResult<SavedEntity>>>,
    categories: RwLock<Vec<String>>,
    channels: RwLock<Vec<Channel>>,
    locales: RwLock<Vec<String>>,
    /// 如果 Some，所有列表请求返回此错误
    list_error: RwLock<Option<ApiError>>,
    calls: RwLock<CallLog>,
}

impl MockAdminApi {
    pub fn new() -> Self {
        Self {
            adgroups: RwLock::new(HashMap::new()),
            create_response: RwLock::new(None),
            update_response: RwLock::new(None),
            categories: RwLock::new(Vec::new()),
            channels: RwLock::new(Vec::new()),
            locales: RwLock::new(Vec::new()),
            list_error: RwLock::new(None),
            calls: RwLock::new(CallLog::default()),
        }
    }

    pub async fn insert_adgroup(&self, adgroup: Adgroup) {
        self.adgroups.write().await.insert(adgroup.id, adgroup);
    }

    pub async fn set_create_response(&self, response: ApiResult<SavedEntity>) {
        *self.create_response.write().await = Some(response);
    }

    pub async fn set_update_response(&self, response: ApiResult<SavedEntity>) {
        *self.update_response.write().await = Some(response);
    }

    pub async fn set_reference_data(
        &self,
        categories: Vec<String>,
        channels: Vec<Channel>,
        locales: Vec<String>,
    ) {
        *self.categories.write().await = categories;
        *self.channels.write().await = channels;
        *self.locales.write().await = locales;
    }

    pub async fn set_list_error(&self, err: Option<ApiError>) {
        *self.list_error.write().await = err;
    }

    pub async fn create_calls(&self) -> usize {
        self.calls.read().await.create
    }

    pub async fn update_calls(&self) -> usize {
        self.calls.read().await.update
    }

    pub async fn last_update_id(&self) -> Option<i64> {
        self.calls.read().await.last_update_id
    }

    pub async fn last_payload(&self) -> Option<AdgroupPayload> {
        self.calls.read().await.last_payload.clone()
    }

    async fn check_list_error(&self) -> ApiResult<()> {
        match self.list_error.read().await.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AdminApi for MockAdminApi {
    async fn get_adgroup(&self, id: i64) -> ApiResult<Adgroup> {
        self.adgroups
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound {
                entity: "adgroup".to_string(),
                id: id.to_string(),
            })
    }

    async fn create_adgroup(&self, payload: &AdgroupPayload) -> ApiResult<SavedEntity> {
        {
            let mut calls = self.calls.write().await;
            calls.create += 1;
            calls.last_payload = Some(payload.clone());
        }
        self.create_response
            .read()
            .await
            .clone()
            .unwrap_or(Ok(SavedEntity { id: 1 }))
    }

    async fn update_adgroup(&self, id: i64, payload: &AdgroupPayload) -> ApiResult<SavedEntity> {
        {
            let mut calls = self.calls.write().await;
            calls.update += 1;
            calls.last_update_id = Some(id);
            calls.last_payload = Some(payload.clone());
        }
        self.update_response
            .read()
            .await
            .clone()
            .unwrap_or(Ok(SavedEntity { id }))
    }

    async fn list_channels(&self) -> ApiResult<Vec<Channel>> {
        self.check_list_error().await?;
        Ok(self.channels.read().await.clone())
    }

    async fn list_categories(&self) -> ApiResult<Vec<String>> {
        self.check_list_error().await?;
        Ok(self.categories.read().await.clone())
    }

    async fn list_locales(&self) -> ApiResult<Vec<String>> {
        self.check_list_error().await?;
        Ok(self.locales.read().await.clone())
    }
}

// ===== 测试工厂方法 =====

/// 创建 `AdgroupService` 及其 mock API
pub fn create_test_adgroup_service() -> (AdgroupService, Arc<MockAdminApi>) {
    let api = Arc::new(MockAdminApi::new());
    let ctx = Arc::new(ServiceContext::new(api.clone()));
    (AdgroupService::new(ctx), api)
}

pub fn test_payload() -> AdgroupPayload {
    AdgroupPayload {
        name: "Spring sale".to_string(),
        kind: AdgroupType::Suggested,
        campaign_id: 3,
        channel_id: 1,
        locale: "en-US".to_string(),
        categories: BTreeSet::from(["Sports".to_string()]),
        frequency_cap_daily: Some(3),
        frequency_cap_total: Some(10),
        paused: false,
        explanation: None,
        check_inadjacency: false,
    }
}

pub fn test_adgroup(id: i64) -> Adgroup {
    Adgroup {
        id,
        name: format!("Adgroup {id}"),
        kind: AdgroupType::Suggested,
        campaign_id: 3,
        channel_id: 1,
        locale: "en-US".to_string(),
        categories: BTreeSet::from(["Sports".to_string()]),
        frequency_cap_daily: Some(3),
        frequency_cap_total: Some(10),
        paused: false,
        explanation: None,
        check_inadjacency: false,
        created_at: None,
    }
}
