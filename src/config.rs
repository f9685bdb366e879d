use serde::{Deserialize, Serialize};
use std::fs;
use anyhow::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub inference_config: InferenceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the inference run endpoint; model identifiers are
    /// appended as a path segment.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token for the service. The WORKERS_AI_TOKEN environment
    /// variable takes precedence over this field.
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default = "default_text_model")]
    pub text_model: String,
    #[serde(default = "default_translation_model")]
    pub translation_model: String,
}

fn default_base_url() -> String {
    // Local dev endpoint; production deployments point this at
    // https://api.cloudflare.com/client/v4/accounts/<account_id>/ai/run
    "http://localhost:8787/ai/run".to_string()
}

fn default_text_model() -> String {
    "@cf/meta/llama-3.3-70b-instruct-fp8-fast".to_string()
}

fn default_translation_model() -> String {
    "@cf/meta/m2m100-1.2b".to_string()
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        // Determine file type by extension
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".jsonld") || path_lower.ends_with(".json") {
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            let config: Config = serde_yaml::from_str(&content)?;
            Ok(config)
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_token: None,
            text_model: default_text_model(),
            translation_model: default_translation_model(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_config_fills_missing_fields_with_defaults() {
        let yaml = r#"
system_config:
  port: 9000
inference_config:
  base_url: "https://api.cloudflare.com/client/v4/accounts/abc/ai/run"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.system_config.port, 9000);
        assert_eq!(config.system_config.host, "0.0.0.0");
        assert_eq!(
            config.inference_config.base_url,
            "https://api.cloudflare.com/client/v4/accounts/abc/ai/run"
        );
        assert_eq!(
            config.inference_config.translation_model,
            "@cf/meta/m2m100-1.2b"
        );
        assert!(config.inference_config.api_token.is_none());
    }

    #[test]
    fn empty_sections_are_optional() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.system_config.port, 3000);
        assert_eq!(
            config.inference_config.text_model,
            "@cf/meta/llama-3.3-70b-instruct-fp8-fast"
        );
    }
}
