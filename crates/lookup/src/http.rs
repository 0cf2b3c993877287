//! HTTP order source -- fetches order documents from the lookup service.
//!
//! Uses `ureq` (sync) wrapped in `tokio::task::spawn_blocking` to avoid
//! blocking the async runtime. The service is addressed at a fixed base
//! URL with the order identifier appended to the `/order/` path prefix.

use async_trait::async_trait;

use crate::source::{LookupError, LookupResult, OrderSource};

/// Base URL used when `ORDERLENS_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";

/// Environment variable overriding the lookup service base URL.
pub const BASE_URL_ENV: &str = "ORDERLENS_BASE_URL";

/// Source that fetches orders via HTTP GET `{base_url}/order/{order_id}`.
pub struct HttpOrderSource {
    base_url: String,
}

impl HttpOrderSource {
    pub fn new(base_url: &str) -> Self {
        HttpOrderSource {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from `ORDERLENS_BASE_URL`, falling back to
    /// [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        HttpOrderSource::new(&base_url)
    }

    /// The request URL for an order id (appended verbatim).
    pub fn order_url(&self, order_id: &str) -> String {
        format!("{}/order/{}", self.base_url, order_id)
    }
}

#[async_trait]
impl OrderSource for HttpOrderSource {
    async fn lookup(&self, order_id: &str) -> LookupResult {
        let url = self.order_url(order_id);

        let result = tokio::task::spawn_blocking(move || {
            let agent = ureq::Agent::new_with_defaults();
            let response = agent.get(&url).call().map_err(|e| match e {
                ureq::Error::StatusCode(404) => LookupError::NotFound,
                ureq::Error::StatusCode(status) => LookupError::Server { status },
                other => LookupError::Connection {
                    message: other.to_string(),
                },
            })?;

            // A 200 with an unparseable body surfaces like a transport
            // failure; the two are not distinguished to the user.
            response
                .into_body()
                .read_json()
                .map_err(|e| LookupError::Connection {
                    message: format!("failed to parse response as JSON: {}", e),
                })
        })
        .await
        .map_err(|e| LookupError::Connection {
            message: format!("task join error: {}", e),
        })?;

        result
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
