//! Graph API client executing accumulated batch requests

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, error, info};
use url::Url;

use crate::core::batch::{BatchQueue, BatchResult, encode, unpack};
use crate::sdk::config::ClientConfig;
use crate::sdk::errors::{BatchError, Result};

/// Graph API batch client
///
/// Holds the session context (access token, endpoint) and the HTTP client.
/// Queues are owned by the caller and passed in per submission, so one client
/// can serve several independent workflows.
#[derive(Debug)]
pub struct GraphClient {
    pub(crate) config: ClientConfig,
    pub(crate) http_client: reqwest::Client,
}

impl GraphClient {
    /// Create a new Graph client
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.access_token.is_empty() {
            return Err(BatchError::Config("No access token configured".to_string()));
        }

        Url::parse(&config.base_url)
            .map_err(|e| BatchError::Config(format!("Invalid base URL {}: {}", config.base_url, e)))?;

        // Build HTTP client
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.settings.timeout))
            .build()
            .map_err(|e| BatchError::Config(format!("Failed to create HTTP client: {}", e)))?;

        info!("GraphClient created for {}", config.base_url);

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Get configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Submit the queued requests as one batch call
    ///
    /// Performs exactly one HTTP POST carrying the encoded payload and the
    /// access token. On success the queue is cleared and ready for a fresh
    /// batch; on any failure the queue keeps its contents so the caller can
    /// retry or inspect it. Result *i* corresponds to descriptor *i*.
    pub async fn execute_batch(&self, queue: &mut BatchQueue) -> Result<Vec<BatchResult>> {
        if queue.is_empty() {
            return Err(BatchError::InvalidRequest(
                "batch queue is empty".to_string(),
            ));
        }

        let expected = queue.len();
        let payload = encode(queue)?;
        let url = self.batch_endpoint();

        debug!("Submitting batch of {} requests to {}", expected, url);

        let response = self
            .http_client
            .post(&url)
            .form(&[
                ("access_token", self.config.access_token.as_str()),
                ("batch", payload.as_str()),
            ])
            .send()
            .await
            .map_err(|e| BatchError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Batch endpoint error: {} - {}", status, error_text);
            return Err(BatchError::Api(format!("HTTP {}: {}", status, error_text)));
        }

        let raw: Value = response
            .json()
            .await
            .map_err(|e| BatchError::MalformedResponse(e.to_string()))?;

        let results = unpack(raw, expected)?;

        // Confirmed success: reset for the next batch.
        queue.clear();
        debug!("Batch of {} requests completed", expected);

        Ok(results)
    }

    /// Endpoint the batch payload is posted to
    fn batch_endpoint(&self) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        match &self.config.api_version {
            Some(version) => format!("{}/{}", base, version.trim_matches('/')),
            None => base.to_string(),
        }
    }
}
