//! Summarizer backed by a `{query, context}` → `{text}` JSON endpoint

use super::{Summarizer, SummaryRequest, SummaryResponse};
use crate::config::SummarizerConfig;
use crate::error::{LarisManisError, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Posts the ranked matches to a chat proxy endpoint
pub struct HttpSummarizer {
    http_client: reqwest::Client,
    url: String,
    api_key: Option<String>,
    model: String,
}

impl HttpSummarizer {
    /// Create from configuration
    pub fn new(config: &SummarizerConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            url: config.url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl Summarizer for HttpSummarizer {
    async fn summarize(&self, request: &SummaryRequest) -> Result<String> {
        let mut req = self.http_client.post(&self.url).json(request);

        if let Some(ref api_key) = self.api_key {
            req = req.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = req.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LarisManisError::ExternalError(format!(
                "Chat endpoint error (HTTP {}): {}",
                status, body
            )));
        }

        let body: SummaryResponse = response.json().await?;

        match body.text.map(|t| t.trim().to_string()) {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(LarisManisError::Summarizer("empty text".to_string())),
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
