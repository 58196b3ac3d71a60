//! HTTP client for the combined benchmark endpoint.
//!
//! One outbound request per operation, attempted exactly once — no retries,
//! no backoff, no client-enforced timeout. The endpoint fans out to both
//! backends server-side, so the per-backend timings are authoritative values
//! inside the response body and are never measured here.

use crate::config::ApiConfig;
use crate::error::{BenchError, Result};
use reqwest::Client;
use reqwest::multipart::Form;
use serde::Deserialize;
use tracing::debug;

use super::types::{HealthWire, IngestWire, SearchRequestWire, SearchWire};

/// FastAPI-style error body.
#[derive(Debug, Deserialize)]
struct ApiError {
    detail: serde_json::Value,
}

/// Client for the combined ingestion/search endpoint.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Get the URL for an endpoint path.
    fn endpoint(&self, path: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        format!("{}/{}", base, path)
    }

    /// Submit one multipart ingestion request.
    pub(crate) async fn post_ingest(&self, form: Form) -> Result<IngestWire> {
        let url = self.endpoint("ingest");
        debug!(%url, "submitting ingestion request");

        let response = self.client.post(url).multipart(form).send().await?;
        Self::decode(response).await
    }

    /// Submit one search request.
    pub(crate) async fn post_search(&self, request: &SearchRequestWire) -> Result<SearchWire> {
        let url = self.endpoint("search");
        debug!(%url, query = %request.query, limit = request.limit, "submitting search request");

        let response = self.client.post(url).json(request).send().await?;
        Self::decode(response).await
    }

    /// Check that the benchmark endpoint is reachable.
    pub async fn health(&self) -> Result<()> {
        let response = self.client.get(self.endpoint("health")).send().await?;
        let health: HealthWire = Self::decode(response).await?;

        if health.status == "ok" {
            Ok(())
        } else {
            Err(BenchError::Request(format!(
                "unexpected health status: {}",
                health.status
            )))
        }
    }

    /// Normalize a response into the uniform envelope: a success status
    /// decodes the body, anything else is a request failure.
    async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Try to parse as an API error body
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&body) {
                return Err(BenchError::Request(format!(
                    "API error ({}): {}",
                    status, api_error.detail
                )));
            }
            return Err(BenchError::Request(format!(
                "request failed ({}): {}",
                status, body
            )));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_construction() {
        let client = ApiClient::new(ApiConfig {
            base_url: "http://localhost:4800/".to_string(),
        });
        assert_eq!(client.endpoint("ingest"), "http://localhost:4800/ingest");

        // Without trailing slash
        let client2 = ApiClient::new(ApiConfig {
            base_url: "http://localhost:4800".to_string(),
        });
        assert_eq!(client2.endpoint("search"), "http://localhost:4800/search");
    }
}
