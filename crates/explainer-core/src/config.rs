//! Configuration management for the letter explainer

use crate::error::{ExplainerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainerConfig {
    pub openai: OpenAIConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub fetch: FetchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIConfig {
    pub api_key: String,

    #[serde(default = "default_openai_model")]
    pub model: String,

    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,

    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Settings for the letter download client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_fetch_timeout_secs")]
    pub timeout_secs: u64,
}

// Default functions
fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_fetch_timeout_secs() -> u64 {
    20
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

impl ExplainerConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ExplainerError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_json_str(&content)
    }

    /// Load configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ExplainerError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables.
    /// OPENAI_API_KEY is required; OPENAI_MODEL and OPENAI_BASE_URL are optional.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            ExplainerError::Config("OPENAI_API_KEY environment variable is required".to_string())
        })?;

        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| default_openai_model());
        let base_url = std::env::var("OPENAI_BASE_URL").ok();

        let config = Self {
            openai: OpenAIConfig {
                api_key,
                model,
                base_url,
            },
            server: ServerConfig::default(),
            fetch: FetchConfig::default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.openai.api_key.is_empty() {
            return Err(ExplainerError::Config(
                "OpenAI API key is required".to_string(),
            ));
        }

        if self.openai.model.is_empty() {
            return Err(ExplainerError::Config(
                "OpenAI model identifier is required".to_string(),
            ));
        }

        if self.fetch.timeout_secs == 0 {
            return Err(ExplainerError::Config(
                "Fetch timeout must be at least one second".to_string(),
            ));
        }

        Ok(())
    }
}
