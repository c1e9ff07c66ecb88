//! HTTP backend.
//!
//! Every request URL is the configured base followed by a relative path,
//! joined by [`ApiBase::endpoint`]. GET requests are retried on transport
//! failures; POST requests are sent once.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::config::{ApiBase, Config};
use crate::error::{ApiError, ApiResult};
use crate::logs::{log_info_indent, log_warning};

/// Delay between retries in milliseconds
const RETRY_DELAY_MS: u64 = 500;

/// Error body produced by the backend (`{"detail": ...}`).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Value,
}

/// Client for a remote backend.
#[derive(Debug)]
pub struct HttpBackend {
    base: ApiBase,
    client: reqwest::Client,
    max_retries: u32,
    sent: AtomicUsize,
}

impl HttpBackend {
    pub fn new(config: &Config) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            base: config.api_base().clone(),
            client,
            max_retries: config.max_retries().max(1),
            sent: AtomicUsize::new(0),
        })
    }

    /// Number of requests put on the wire so far, retries included.
    pub fn requests_sent(&self) -> usize {
        self.sent.load(Ordering::Relaxed)
    }

    fn url(&self, path: &str) -> ApiResult<String> {
        self.base
            .endpoint(path)
            .ok_or_else(|| ApiError::InvalidInput("no backend base URL configured".to_string()))
    }

    /// GET `path` with query parameters, retrying transport failures.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let url = self.url(path)?;
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            let mut request = self.client.get(&url);
            if !query.is_empty() {
                request = request.query(query);
            }

            match self.send(request).await {
                Ok(value) => return Ok(value),
                Err(ApiError::Request(e)) => {
                    log_warning(format!(
                        "GET {} attempt {}/{} failed: {}",
                        url, attempt, self.max_retries, e
                    ));
                    last_error = Some(ApiError::Request(e));

                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(RETRY_DELAY_MS)).await;
                    }
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| ApiError::Request("no attempt made".to_string())))
    }

    /// POST a JSON body to `path`.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        self.send(self.client.post(&url).json(body)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> ApiResult<T> {
        let request = request.build()?;
        log_info_indent(format!("{} {}", request.method(), request.url()), 1);

        self.sent.fetch_add(1, Ordering::Relaxed);
        let response = self.client.execute(request).await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let detail = error_detail(&body);
            return Err(if status == reqwest::StatusCode::NOT_FOUND {
                ApiError::NotFound(detail)
            } else {
                ApiError::Status {
                    status: status.as_u16(),
                    detail,
                }
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

/// Pull a readable message out of an error body.
fn error_detail(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { detail: Value::String(s) }) => s,
        Ok(ErrorBody { detail }) => detail.to_string(),
        Err(_) if body.is_empty() => "empty response".to_string(),
        Err(_) => body.chars().take(500).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_string() {
        assert_eq!(error_detail(r#"{"detail": "Person not found"}"#), "Person not found");
    }

    #[test]
    fn test_error_detail_structured() {
        let detail = error_detail(r#"{"detail": [{"loc": ["body", "full_name"]}]}"#);
        assert!(detail.contains("full_name"));
    }

    #[test]
    fn test_error_detail_plain_text() {
        assert_eq!(error_detail("Bad Gateway"), "Bad Gateway");
        assert_eq!(error_detail(""), "empty response");
    }

    #[test]
    fn test_demo_base_has_no_url() {
        let backend = HttpBackend::new(&Config::default()).unwrap();
        assert!(matches!(backend.url("/api/health"), Err(ApiError::InvalidInput(_))));
        assert_eq!(backend.requests_sent(), 0);
    }
}
