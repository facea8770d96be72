//! Low-level HTTP client — `ViteaHttp`.
//!
//! Generic verbs with a per-request retry policy. Sub-clients build the
//! venue's URLs (trailing-slash collection paths) and convert wire types to
//! domain types at their own boundary. Internal to the SDK.

use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Failure body the venue sends for rejected requests.
#[derive(Debug, Deserialize)]
struct ApiFailure {
    detail: String,
}

/// Low-level HTTP client for the Vitea REST API.
#[derive(Clone)]
pub struct ViteaHttp {
    base_url: String,
    client: Client,
}

impl ViteaHttp {
    pub fn new(base_url: &str) -> Self {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(Duration::from_secs(30))
                .pool_max_idle_per_host(10);
        }

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Verbs ────────────────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let resp = self
            .request_with_retry(reqwest::Method::GET, url, None::<&()>, retry)
            .await?;
        Ok(resp.json::<T>().await?)
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let resp = self
            .request_with_retry(reqwest::Method::POST, url, Some(body), retry)
            .await?;
        Ok(resp.json::<T>().await?)
    }

    /// The venue's DELETE responses carry no stable body; the status code is
    /// the contract.
    pub(crate) async fn delete(&self, url: &str, retry: RetryPolicy) -> Result<(), HttpError> {
        self.request_with_retry(reqwest::Method::DELETE, url, None::<&()>, retry)
            .await?;
        Ok(())
    }

    // ── Internals ────────────────────────────────────────────────────────

    async fn request_with_retry<B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<reqwest::Response, HttpError> {
        let config = match retry {
            RetryPolicy::None => {
                return self.do_request(&method, url, body).await;
            }
            RetryPolicy::Reads => RetryConfig::default(),
            RetryPolicy::Custom(c) => c,
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request(&method, url, body).await {
                Ok(resp) => return Ok(resp),
                Err(e) if e.is_transient() => {
                    if attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                    }
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(HttpError::RetriesExhausted {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<B: Serialize>(
        &self,
        method: &reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, HttpError> {
        let mut req = self.client.request(method.clone(), url);
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) if e.is_timeout() => return Err(HttpError::Timeout),
            Err(e) => return Err(e.into()),
        };

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let status = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();
        let detail = match serde_json::from_str::<ApiFailure>(&body_text) {
            Ok(failure) => failure.detail,
            Err(_) => body_text,
        };
        Err(HttpError::Api { status, detail })
    }
}
