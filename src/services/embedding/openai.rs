//! OpenAI embeddings client.
//!
//! Thin pass-through over `POST /v1/embeddings`. The model's dimensionality
//! is whatever the provider returns; nothing in this crate hard-codes it.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

use super::errors::ProviderError;
use super::EmbeddingProvider;
use crate::env::apis as env_vars;

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var(env_vars::OPENAI_API_KEY).unwrap_or_default(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: "text-embedding-3-small".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl OpenAiConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::ConfigurationError {
                message: "OpenAI API key is required".to_string(),
            });
        }

        if self.base_url.is_empty() {
            return Err(ProviderError::ConfigurationError {
                message: "Base URL cannot be empty".to_string(),
            });
        }

        if self.model.is_empty() {
            return Err(ProviderError::ConfigurationError {
                message: "Model name cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    input: &'a str,
    model: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[derive(Clone)]
pub struct OpenAiEmbeddingClient {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiEmbeddingClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, ProviderError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::ConfigurationError {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    async fn embed_once(&self, text: &str) -> Result<Vec<f32>, ProviderError> {
        let url = format!("{}/embeddings", self.config.base_url);
        let request = EmbeddingRequest {
            input: text,
            model: &self.config.model,
        };

        let response = timeout(
            self.config.timeout,
            self.client
                .post(&url)
                .bearer_auth(&self.config.api_key)
                .json(&request)
                .send(),
        )
        .await
        .map_err(|_| ProviderError::Timeout {
            timeout_ms: self.config.timeout.as_millis() as u64,
        })?
        .map_err(ProviderError::from_reqwest_error)?;

        self.handle_response(response).await
    }

    async fn handle_response(&self, response: Response) -> Result<Vec<f32>, ProviderError> {
        let status = response.status();

        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(ProviderError::from_reqwest_error)?;

            let parsed: EmbeddingResponse =
                serde_json::from_str(&body).map_err(|e| ProviderError::ParseError {
                    message: format!("Failed to parse embeddings response: {e}"),
                })?;

            let embedding = parsed
                .data
                .into_iter()
                .next()
                .map(|d| d.embedding)
                .ok_or(ProviderError::EmptyResponse)?;

            if embedding.is_empty() {
                return Err(ProviderError::EmptyResponse);
            }

            debug!(dimensions = embedding.len(), "Received embedding");
            Ok(embedding)
        } else {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());

            Err(ProviderError::from_status_and_body(status, &body))
        }
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiEmbeddingClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, ProviderError> {
        self.embed_once(text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let valid = OpenAiConfig::new("sk-test".to_string());
        assert!(valid.validate().is_ok());

        let missing_key = OpenAiConfig::new(String::new());
        assert!(matches!(
            missing_key.validate(),
            Err(ProviderError::ConfigurationError { .. })
        ));

        let missing_model = OpenAiConfig::new("sk-test".to_string()).with_model(String::new());
        assert!(missing_model.validate().is_err());
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        assert!(OpenAiEmbeddingClient::new(OpenAiConfig::new(String::new())).is_err());
    }

    #[test]
    fn test_response_deserialization() {
        let body = r#"{"data": [{"embedding": [0.1, -0.2, 0.3], "index": 0}], "model": "text-embedding-3-small"}"#;
        let parsed: EmbeddingResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data[0].embedding, vec![0.1, -0.2, 0.3]);
    }
}
