//! HTTP client for downloading remote letter files

use crate::config::FetchConfig;
use crate::error::{ExplainerError, Result};
use crate::types::FetchedDocument;
use async_trait::async_trait;
use reqwest::Client as HttpClient;

/// Seam for fetching remote documents; tests substitute doubles here
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Download the file at `url`, returning its bytes and declared content type
    async fn fetch(&self, url: &str) -> Result<FetchedDocument>;
}

pub struct DocumentClient {
    http_client: HttpClient,
}

impl DocumentClient {
    pub fn new(config: FetchConfig) -> Self {
        let http_client = HttpClient::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { http_client }
    }
}

#[async_trait]
impl DocumentFetcher for DocumentClient {
    async fn fetch(&self, url: &str) -> Result<FetchedDocument> {
        log::debug!("Downloading document from {}", url);

        let response = self.http_client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ExplainerError::Fetch(format!(
                "Download of {} returned HTTP {}",
                url,
                response.status()
            )));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_lowercase();

        let bytes = response.bytes().await?.to_vec();

        log::debug!(
            "Downloaded {} bytes with content type '{}'",
            bytes.len(),
            content_type
        );

        Ok(FetchedDocument {
            bytes,
            content_type,
        })
    }
}
