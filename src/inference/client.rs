use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use super::interface::{InferenceBackend, InferenceError};
use super::types::RunOptions;

/// HTTP client for a Workers AI style run endpoint.
///
/// The model identifier becomes the final path segment; queued batch
/// submission is requested through the `queueRequest` query flag.
#[derive(Debug, Clone)]
pub struct WorkersAiClient {
    client: Client,
    base_url: String,
    api_token: Option<String>,
}

impl WorkersAiClient {
    pub fn new(base_url: String, api_token: Option<String>) -> Self {
        info!("Initialized WorkersAiClient: base_url={}", base_url);
        Self {
            client: Client::new(),
            base_url,
            api_token,
        }
    }
}

#[async_trait]
impl InferenceBackend for WorkersAiClient {
    async fn run(
        &self,
        model: &str,
        params: Value,
        options: RunOptions,
    ) -> Result<Value, InferenceError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), model);
        debug!("Running model {} (queued={})", model, options.queue_request);

        let mut request = self.client.post(&url).json(&params);
        if options.queue_request {
            request = request.query(&[("queueRequest", "true")]);
        }
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let result: Value = response.json().await?;
        Ok(result)
    }
}
