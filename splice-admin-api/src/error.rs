use serde::{Deserialize, Serialize};

/// Unified error type for all admin API operations.
///
/// Transport failures carry the `endpoint` (method and path) that produced them.
/// Business-rule rejections carry the server-provided message verbatim, so the
/// `Display` of [`Rejected`](Self::Rejected) can be shown to the user as-is.
///
/// # Retryable Errors
///
/// - [`NetworkError`](Self::NetworkError) — connection refused, 502/503/504, etc.
/// - [`Timeout`](Self::Timeout) — request timed out
///
/// Only read requests are retried by the client; create/update are sent once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// A network-level error occurred before a usable response was received.
    NetworkError {
        /// Method and path of the failed request.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Method and path of the failed request.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The API answered without a `result`, i.e. it rejected the request.
    Rejected {
        /// HTTP status code of the response.
        status: u16,
        /// Message supplied by the server (`{message: ...}`).
        message: String,
    },

    /// The requested entity does not exist.
    NotFound {
        /// Entity kind, e.g. `"adgroup"`.
        entity: String,
        /// Identifier that was looked up.
        id: String,
    },

    /// The response body could not be parsed.
    ParseError {
        /// Method and path of the failed request.
        endpoint: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// A request body could not be serialized.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// The configured base URL cannot be used to build request URLs.
    InvalidBaseUrl {
        /// The offending URL.
        url: String,
        /// Why it was rejected.
        detail: String,
    },
}

impl ApiError {
    /// 是否为预期行为（服务端拒绝、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Rejected { .. } | Self::NotFound { .. })
    }

    /// Whether the request never produced an answer from the API.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::ParseError { .. }
        )
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { endpoint, detail } => {
                write!(f, "[{endpoint}] Network error: {detail}")
            }
            Self::Timeout { endpoint, detail } => {
                write!(f, "[{endpoint}] Request timeout: {detail}")
            }
            Self::Rejected { message, .. } => write!(f, "{message}"),
            Self::NotFound { entity, id } => write!(f, "{entity} '{id}' not found"),
            Self::ParseError { endpoint, detail } => {
                write!(f, "[{endpoint}] Parse error: {detail}")
            }
            Self::SerializationError { detail } => write!(f, "Serialization error: {detail}"),
            Self::InvalidBaseUrl { url, detail } => {
                write!(f, "Invalid API base URL '{url}': {detail}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
