use std::sync::Arc;

use crate::config::Config;
use crate::inference::{InferenceBackend, WorkersAiClient};

/// Shared application state. The inference client is built once at
/// startup and shared across requests; nothing else is shared.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub inference: Arc<dyn InferenceBackend>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let api_token = std::env::var("WORKERS_AI_TOKEN")
            .ok()
            .or_else(|| config.inference_config.api_token.clone());

        let inference = Arc::new(WorkersAiClient::new(
            config.inference_config.base_url.clone(),
            api_token,
        ));

        Self { config, inference }
    }
}
