//! Splice admin REST client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};
use crate::http_client::HttpUtils;
use crate::traits::AdminApi;
use crate::types::{Adgroup, AdgroupPayload, Channel, SavedEntity};

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// 读请求默认重试次数
const DEFAULT_MAX_RETRIES: u32 = 2;

/// Connection settings for [`SpliceClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, e.g. `https://splice.example.com/api`.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Retries for GET requests. Create/update are never retried.
    pub max_retries: u32,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// [`AdminApi`] over HTTP + JSON.
#[derive(Debug)]
pub struct SpliceClient {
    client: Client,
    base_url: String,
    max_retries: u32,
}

impl SpliceClient {
    /// Build a client; fails if the base URL is not an absolute http(s) URL.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = normalize_base_url(&config.base_url)?;
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::NetworkError {
                endpoint: "client".to_string(),
                detail: format!("Failed to create HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            base_url,
            max_retries: config.max_retries,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// 执行 GET 请求（带重试）
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let endpoint = format!("GET {path}");
        let request = self.client.get(self.url(path));
        let (status, text) =
            HttpUtils::execute_request_with_retry(request, &endpoint, self.max_retries).await?;
        HttpUtils::parse_envelope(status, &text, &endpoint)
    }

    /// 执行写请求（POST/PUT），只发送一次
    async fn send_json<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let endpoint = format!("{method} {path}");
        let body_json = serde_json::to_string(body).map_err(|e| ApiError::SerializationError {
            detail: e.to_string(),
        })?;
        log::debug!("[{endpoint}] Request Body: {body_json}");

        let request = self
            .client
            .request(method, self.url(path))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body_json);
        let (status, text) = HttpUtils::execute_request(request, &endpoint).await?;
        HttpUtils::parse_envelope(status, &text, &endpoint)
    }
}

#[async_trait]
impl AdminApi for SpliceClient {
    async fn get_adgroup(&self, id: i64) -> Result<Adgroup> {
        self.get(&format!("/adgroups/{id}"))
            .await
            .map_err(|e| match e {
                ApiError::Rejected { status: 404, .. } => ApiError::NotFound {
                    entity: "adgroup".to_string(),
                    id: id.to_string(),
                },
                other => other,
            })
    }

    async fn create_adgroup(&self, payload: &AdgroupPayload) -> Result<SavedEntity> {
        self.send_json(Method::POST, "/adgroups", payload).await
    }

    async fn update_adgroup(&self, id: i64, payload: &AdgroupPayload) -> Result<SavedEntity> {
        self.send_json(Method::PUT, &format!("/adgroups/{id}"), payload)
            .await
    }

    async fn list_channels(&self) -> Result<Vec<Channel>> {
        self.get("/channels").await
    }

    async fn list_categories(&self) -> Result<Vec<String>> {
        self.get("/categories").await
    }

    async fn list_locales(&self) -> Result<Vec<String>> {
        self.get("/locales").await
    }
}

/// Validate the base URL and strip trailing slashes so paths can be appended.
fn normalize_base_url(raw: &str) -> Result<String> {
    let parsed = url::Url::parse(raw.trim()).map_err(|e| ApiError::InvalidBaseUrl {
        url: raw.to_string(),
        detail: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ApiError::InvalidBaseUrl {
            url: raw.to_string(),
            detail: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ApiError::InvalidBaseUrl {
            url: raw.to_string(),
            detail: "query and fragment are not allowed".to_string(),
        });
    }
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        assert_eq!(
            normalize_base_url("https://splice.example.com/api/").unwrap(),
            "https://splice.example.com/api"
        );
    }

    #[test]
    fn base_url_host_only_has_no_trailing_slash() {
        assert_eq!(
            normalize_base_url("http://localhost:5000").unwrap(),
            "http://localhost:5000"
        );
    }

    #[test]
    fn base_url_rejects_other_schemes() {
        assert!(matches!(
            normalize_base_url("ftp://example.com"),
            Err(ApiError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn base_url_rejects_relative() {
        assert!(normalize_base_url("/api").is_err());
    }

    #[test]
    fn client_debug_shows_base_url() {
        let client = SpliceClient::new(ClientConfig::new("http://localhost:7001/api/")).unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("http://localhost:7001/api"));
        assert!(debug.contains("max_retries"));
    }

    #[test]
    fn client_builds_endpoint_urls() {
        let client = SpliceClient::new(ClientConfig::new("http://localhost:5000/api/")).unwrap();
        assert_eq!(client.url("/adgroups/7"), "http://localhost:5000/api/adgroups/7");
    }
}
