use serde::{Deserialize, Serialize};

fn default_endpoint() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "llama3.2-vision".to_string()
}

fn default_temperature() -> f64 {
    0.3
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_timeout_secs() -> u64 {
    300
}

/// Connection settings for the local Ollama instance. Every field has a
/// default so a partial (or empty) config deserializes cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: InferenceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.endpoint, "http://localhost:11434");
        assert_eq!(config.model, "llama3.2-vision");
        assert_eq!(config.max_tokens, 1000);
    }

    #[test]
    fn partial_config_keeps_overrides() {
        let config: InferenceConfig =
            serde_json::from_str(r#"{"model": "llava", "timeout_secs": 60}"#).unwrap();
        assert_eq!(config.model, "llava");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.endpoint, "http://localhost:11434");
    }
}
