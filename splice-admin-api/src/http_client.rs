//! Generic HTTP request handling
//!
//! Every endpoint goes through the same flow: send, log, map transport
//! failures, read the body, then branch on the `{result}` / `{message}`
//! envelope. Endpoint methods only build the `RequestBuilder`.

use std::time::Duration;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};
use crate::types::ApiEnvelope;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and body text.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `endpoint` - method and path, e.g. `"POST /adgroups"` (for logs and errors)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))`
    /// * `Err(ApiError::Timeout | ApiError::NetworkError)` - transport failure or 502/503/504
    pub async fn execute_request(
        request_builder: RequestBuilder,
        endpoint: &str,
    ) -> Result<(u16, String)> {
        log::debug!("{endpoint}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    endpoint: endpoint.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ApiError::NetworkError {
                    endpoint: endpoint.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{endpoint}] Response Status: {status_code}");

        // Gateway errors never carry the API envelope
        if matches!(status_code, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{endpoint}] Gateway error (HTTP {status_code})");
            return Err(ApiError::NetworkError {
                endpoint: endpoint.to_string(),
                detail: format!("HTTP {status_code}: {}", truncate_for_log(&body)),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ApiError::NetworkError {
                endpoint: endpoint.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{endpoint}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse a response body as an [`ApiEnvelope`] and branch on it.
    ///
    /// A body that is not JSON is a [`ApiError::ParseError`] on a 2xx status and
    /// a [`ApiError::Rejected`] with a generic message otherwise.
    pub fn parse_envelope<T>(status: u16, response_text: &str, endpoint: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let envelope: ApiEnvelope<T> = match serde_json::from_str(response_text) {
            Ok(envelope) => envelope,
            Err(e) if (200..300).contains(&status) => {
                log::error!("[{endpoint}] JSON parse failed: {e}");
                log::error!(
                    "[{endpoint}] Raw response: {}",
                    truncate_for_log(response_text)
                );
                return Err(ApiError::ParseError {
                    endpoint: endpoint.to_string(),
                    detail: e.to_string(),
                });
            }
            Err(_) => {
                return Err(ApiError::Rejected {
                    status,
                    message: format!("Request failed (HTTP {status})"),
                });
            }
        };

        envelope.into_result(status)
    }

    /// Performs an HTTP request with retries.
    ///
    /// Only transport errors are retried, with exponential backoff. Use this
    /// for reads only: create and update must reach the API exactly once.
    ///
    /// # Retry strategy
    /// - Retries `NetworkError` and `Timeout`
    /// - Backoff: 100ms, 200ms, 400ms, ... (maximum 10 seconds)
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        endpoint: &str,
        max_retries: u32,
    ) -> Result<(u16, String)> {
        if max_retries == 0 {
            return Self::execute_request(request_builder, endpoint).await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder can only be sent once
            let Some(req) = request_builder.try_clone() else {
                log::warn!("[{endpoint}] Cannot clone request, disabling retry");
                return Self::execute_request(request_builder, endpoint).await;
            };

            match Self::execute_request(req, endpoint).await {
                Ok(resp) => return Ok(resp),
                Err(e) if attempt < max_retries && is_retryable(&e) => {
                    let delay = backoff_delay(attempt);
                    log::warn!(
                        "[{}] Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                        endpoint,
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| ApiError::NetworkError {
            endpoint: endpoint.to_string(),
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

/// Transport failures may succeed on retry; answers from the API never do.
fn is_retryable(error: &ApiError) -> bool {
    matches!(
        error,
        ApiError::NetworkError { .. } | ApiError::Timeout { .. }
    )
}

/// Exponential backoff capped at 10 seconds.
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20);
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(10_000))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SavedEntity;

    #[test]
    fn network_and_timeout_are_retryable() {
        assert!(is_retryable(&ApiError::NetworkError {
            endpoint: "GET /channels".into(),
            detail: "refused".into(),
        }));
        assert!(is_retryable(&ApiError::Timeout {
            endpoint: "GET /channels".into(),
            detail: "30s".into(),
        }));
    }

    #[test]
    fn rejection_is_not_retryable() {
        assert!(!is_retryable(&ApiError::Rejected {
            status: 400,
            message: "bad".into(),
        }));
    }

    #[test]
    fn backoff_doubles_then_caps() {
        assert_eq!(backoff_delay(0), Duration::from_millis(100));
        assert_eq!(backoff_delay(3), Duration::from_millis(800));
        assert_eq!(backoff_delay(7), Duration::from_millis(10_000));
        assert_eq!(backoff_delay(40), Duration::from_millis(10_000));
    }

    #[test]
    fn parse_envelope_success() {
        let saved: Result<SavedEntity> =
            HttpUtils::parse_envelope(200, r#"{"result":{"id":42}}"#, "PUT /adgroups/42");
        assert_eq!(saved, Ok(SavedEntity { id: 42 }));
    }

    #[test]
    fn parse_envelope_message_on_error_status() {
        let saved: Result<SavedEntity> =
            HttpUtils::parse_envelope(400, r#"{"message":"bad locale"}"#, "POST /adgroups");
        assert_eq!(
            saved,
            Err(ApiError::Rejected {
                status: 400,
                message: "bad locale".into()
            })
        );
    }

    #[test]
    fn parse_envelope_message_on_ok_status_is_still_rejection() {
        let saved: Result<SavedEntity> =
            HttpUtils::parse_envelope(200, r#"{"message":"duplicate name"}"#, "POST /adgroups");
        assert!(matches!(saved, Err(ApiError::Rejected { status: 200, .. })));
    }

    #[test]
    fn parse_envelope_garbage_on_ok_status_is_parse_error() {
        let saved: Result<SavedEntity> =
            HttpUtils::parse_envelope(200, "<html>", "POST /adgroups");
        assert!(matches!(saved, Err(ApiError::ParseError { .. })));
    }

    #[test]
    fn parse_envelope_garbage_on_error_status_is_rejection() {
        let saved: Result<SavedEntity> =
            HttpUtils::parse_envelope(500, "Internal Server Error", "POST /adgroups");
        assert_eq!(
            saved.unwrap_err().to_string(),
            "Request failed (HTTP 500)"
        );
    }
}
