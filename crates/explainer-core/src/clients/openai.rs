//! OpenAI chat-completion client

use crate::config::OpenAIConfig;
use crate::error::{ExplainerError, Result};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::json;

/// Sampling temperature for explanations, kept low for repeatable output
const COMPLETION_TEMPERATURE: f64 = 0.2;

/// Seam for the chat-completion API; tests substitute doubles here
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `prompt` as a single user message and return the completion text
    async fn complete(&self, prompt: &str) -> Result<String>;
}

pub struct OpenAIClient {
    config: OpenAIConfig,
    http_client: HttpClient,
}

impl OpenAIClient {
    /// The completion request itself carries no timeout; only the
    /// document download is bounded.
    pub fn new(config: OpenAIConfig) -> Self {
        let http_client = HttpClient::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAIClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let api_url = self
            .config
            .base_url
            .as_ref()
            .map(|url| format!("{}/chat/completions", url))
            .unwrap_or_else(|| "https://api.openai.com/v1/chat/completions".to_string());

        log::debug!(
            "Requesting completion from model '{}' ({} chars of prompt)",
            self.config.model,
            prompt.len()
        );

        let response = self
            .http_client
            .post(&api_url)
            .bearer_auth(&self.config.api_key)
            .json(&json!({
                "model": self.config.model,
                "messages": [
                    {
                        "role": "user",
                        "content": prompt
                    }
                ],
                "temperature": COMPLETION_TEMPERATURE
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ExplainerError::ServiceUnavailable(format!(
                "OpenAI API returned {}",
                response.status()
            )));
        }

        let result: serde_json::Value = response.json().await?;

        let content = result["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                ExplainerError::Processing("No content in OpenAI response".to_string())
            })?;

        Ok(content.to_string())
    }
}
