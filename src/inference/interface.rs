use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use super::types::RunOptions;

/// Interface to the managed inference service.
///
/// Every operation goes through the same entry point: translation,
/// structured generation, queued batch submission, and polling a
/// previously queued batch (by passing a `request_id` parameter).
/// The response is whatever JSON the service returns; this side never
/// interprets it.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    async fn run(
        &self,
        model: &str,
        params: Value,
        options: RunOptions,
    ) -> Result<Value, InferenceError>;
}

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("request to inference service failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("inference service returned {status}: {body}")]
    Status { status: u16, body: String },
}
