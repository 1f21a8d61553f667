//! 配置服务
//!
//! 配置文件为 JSON，默认位于 `<config_dir>/splice-admin/config.json`。
//! 文件不存在时使用默认值；环境变量 `SPLICE_ADMIN_API_URL` 覆盖 API 地址。

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use splice_admin_core::ClientConfig;

use crate::view::theme::Theme;

/// 覆盖 API 地址的环境变量
pub const API_URL_ENV: &str = "SPLICE_ADMIN_API_URL";

const DEFAULT_API_BASE_URL: &str = "http://localhost:7001/api";

/// 配置加载错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Splice admin API 根地址
    pub api_base_url: String,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 连接超时（秒）
    pub connect_timeout_secs: u64,
    /// GET 请求重试次数
    pub max_retries: u32,
    pub theme: Theme,
    /// 日志目录；为空时使用 `<data_dir>/splice-admin/logs`
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
            max_retries: 2,
            theme: Theme::Dark,
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// 加载配置：显式路径，否则默认路径
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map_or_else(default_config_file, Path::to_path_buf);
        let mut config = Self::from_file(&path)?;
        config.apply_env(std::env::var(API_URL_ENV).ok());
        Ok(config)
    }

    /// 读取配置文件；文件不存在时返回默认配置
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 环境变量覆盖（空值忽略）
    fn apply_env(&mut self, api_url: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url;
        }
    }

    /// HTTP 客户端配置
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_base_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_retries: self.max_retries,
        }
    }

    /// 日志目录
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("splice-admin")
                .join("logs")
        })
    }
}

/// 获取默认配置文件路径
fn default_config_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("splice-admin")
        .join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::from_file(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "apiBaseUrl": "https://splice.example.com/api", "theme": "light" }"#,
        )
        .unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.api_base_url, "https://splice.example.com/api");
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.max_retries, 2);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn env_overrides_base_url_unless_blank() {
        let mut config = AppConfig::default();
        config.apply_env(Some("  ".into()));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);

        config.apply_env(Some("http://10.0.0.2/api".into()));
        assert_eq!(config.api_base_url, "http://10.0.0.2/api");
    }

    #[test]
    fn client_config_carries_timeouts() {
        let config = AppConfig {
            request_timeout_secs: 5,
            ..AppConfig::default()
        };
        let client = config.client_config();
        assert_eq!(client.request_timeout, Duration::from_secs(5));
        assert_eq!(client.base_url, DEFAULT_API_BASE_URL);
    }
}
