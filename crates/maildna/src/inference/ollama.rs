//! Reqwest-based [`InferenceService`] adapter for a local Ollama instance.

use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::InferenceConfig;
use super::service::{ImagePayload, InferenceError, InferenceService};

/// Ollama `/api/generate` request format (non-streaming).
#[derive(Debug, Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    images: Option<Vec<String>>,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f64,
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
    #[allow(dead_code)]
    done: bool,
}

/// HTTP client for the Ollama API.
pub struct OllamaClient {
    config: InferenceConfig,
    client: Client,
}

impl OllamaClient {
    /// Create a client from the given configuration.
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| InferenceError::Connection(e.to_string()))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Check whether the Ollama instance responds at all.
    pub async fn is_available(&self) -> bool {
        let url = format!("{}/api/tags", self.config.endpoint);
        match self.client.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }
}

#[async_trait]
impl InferenceService for OllamaClient {
    async fn classify(
        &self,
        prompt: &str,
        image: Option<&ImagePayload>,
    ) -> Result<String, InferenceError> {
        let images = image.map(|payload| {
            debug!(filename = %payload.filename, "attaching image to generate request");
            vec![base64::engine::general_purpose::STANDARD.encode(&payload.bytes)]
        });

        let request = GenerateRequest {
            model: self.config.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
            images,
            options: GenerateOptions {
                temperature: self.config.temperature,
                num_predict: self.config.max_tokens,
            },
        };

        let url = format!("{}/api/generate", self.config.endpoint);
        let resp = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| InferenceError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(InferenceError::Api(format!("HTTP {}: {}", status, body)));
        }

        let generated: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| InferenceError::Parse(e.to_string()))?;

        Ok(generated.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_omits_images_field_when_absent() {
        let request = GenerateRequest {
            model: "llama3.2-vision".to_string(),
            prompt: "hello".to_string(),
            stream: false,
            images: None,
            options: GenerateOptions {
                temperature: 0.3,
                num_predict: 1000,
            },
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("images"));
        assert!(json.contains(r#""stream":false"#));
    }

    #[test]
    fn request_encodes_image_as_base64() {
        let encoded = base64::engine::general_purpose::STANDARD.encode(b"\x89PNG");
        let request = GenerateRequest {
            model: "llama3.2-vision".to_string(),
            prompt: "describe".to_string(),
            stream: false,
            images: Some(vec![encoded.clone()]),
            options: GenerateOptions {
                temperature: 0.3,
                num_predict: 1000,
            },
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(&encoded));
    }
}
