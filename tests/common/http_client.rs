//! HTTP client helpers for tests.

use std::time::Duration;

use truthlens::analysis::AnalysisResponse;
use truthlens::gateway::HealthResponse;
use truthlens::gateway::error::ErrorResponse;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    pub async fn analyze(&self, text: &str) -> Result<AnalysisResponse, TestClientError> {
        self.analyze_json(serde_json::json!({ "text": text })).await
    }

    pub async fn analyze_json(
        &self,
        body: serde_json::Value,
    ) -> Result<AnalysisResponse, TestClientError> {
        let resp = self.client.post(self.url("/analyze")).json(&body).send().await?;
        Self::into_result(resp).await
    }

    /// Posts `body` verbatim with a JSON content type.
    pub async fn analyze_raw(&self, body: &str) -> Result<AnalysisResponse, TestClientError> {
        let resp = self
            .client
            .post(self.url("/analyze"))
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .send()
            .await?;
        Self::into_result(resp).await
    }

    pub async fn health(&self) -> Result<HealthResponse, TestClientError> {
        let resp = self.client.get(self.url("/health")).send().await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(TestClientError::UnexpectedStatus(status, body))
        }
    }

    async fn into_result(resp: reqwest::Response) -> Result<AnalysisResponse, TestClientError> {
        match resp.status().as_u16() {
            200 => Ok(resp.json().await?),
            400 => Err(TestClientError::BadRequest(resp.json().await?)),
            500 => Err(TestClientError::ServerError(resp.json().await?)),
            status => {
                let body = resp.text().await.unwrap_or_default();
                Err(TestClientError::UnexpectedStatus(status, body))
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TestClientError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0} - Body: {1}")]
    UnexpectedStatus(u16, String),

    #[error("Bad request: {0:?}")]
    BadRequest(ErrorResponse),

    #[error("Server error: {0:?}")]
    ServerError(ErrorResponse),
}
