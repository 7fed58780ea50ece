use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::{CodexError, CodexResult};

use super::RemoteCatalog;

/// HTTP adapter for the remote catalog store.
///
/// Collections are served at `GET {base}/_api/catalog/{path}` as a
/// `{"documents": [...]}` envelope. Authentication, when the deployment
/// requires it, is a bearer token passed through as-is; obtaining the token
/// is the caller's concern.
pub struct HttpCatalog {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl HttpCatalog {
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_idle_timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(16)
            .build()
            .unwrap();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            client,
        }
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn set_token(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    fn get_headers(&self) -> reqwest::header::HeaderMap {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(reqwest::header::CONTENT_TYPE, "application/json".parse().unwrap());
        if let Some(token) = &self.token {
            headers.insert(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", token).parse().unwrap(),
            );
        }
        headers
    }

    async fn request(&self, path: &str) -> CodexResult<Value> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .headers(self.get_headers())
            .send()
            .await
            .map_err(|e| CodexError::Remote(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CodexError::Remote(format!(
                "HTTP {} {}: {}",
                status, path, error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| CodexError::Remote(format!("Failed to parse response: {}", e)))
    }

    /// Liveness probe against the store's health endpoint.
    pub async fn ping(&self) -> bool {
        self.request("/health").await.is_ok()
    }
}

#[async_trait]
impl RemoteCatalog for HttpCatalog {
    async fn list_documents(&self, path: &str) -> CodexResult<Vec<Value>> {
        debug!("Fetching collection: {}", path);
        let response = self.request(&format!("/_api/catalog/{}", path)).await?;

        Ok(response
            .get("documents")
            .and_then(|d| d.as_array())
            .cloned()
            .unwrap_or_default())
    }
}
