//! Summarizer talking directly to an OpenAI-compatible chat service (vLLM, OpenAI, etc.)
//!
//! Builds the grounded shopping-assistant prompt itself instead of relying
//! on a proxy endpoint.

use super::{Summarizer, SummaryRequest};
use crate::config::SummarizerConfig;
use crate::error::{LarisManisError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SYSTEM_PROMPT: &str = "Anda adalah asisten belanja untuk platform UMKM Laris Manis.
Aturan ketat:
- HANYA gunakan data yang diberikan pada KONTEKS sebagai sumber kebenaran.
- Jangan mengarang produk/merk/harga yang tidak ada di KONTEKS.
- Jawab singkat dalam bahasa Indonesia (1-2 kalimat ringkas), sebagai pengantar.
- Jangan mencetak ulang semua detail; daftar produk akan dirender oleh klien.
- Jika tidak ada yang relevan, katakan ringkas bahwa tidak ditemukan di katalog.";

/// Chat message for completion requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat-completion backed summarizer
pub struct ChatSummarizer {
    http_client: reqwest::Client,
    url: String,
    model: String,
    api_key: Option<String>,
    context_char_limit: usize,
}

impl ChatSummarizer {
    /// Create from configuration
    pub fn new(config: &SummarizerConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            url: config.url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            context_char_limit: config.context_char_limit,
        })
    }

    /// System and user messages for `request`
    pub fn build_messages(&self, request: &SummaryRequest) -> Result<Vec<ChatMessage>> {
        Ok(vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(build_user_prompt(request, self.context_char_limit)?),
        ])
    }
}

fn build_user_prompt(request: &SummaryRequest, context_char_limit: usize) -> Result<String> {
    let context_json = serde_json::to_string(&request.context)?;
    let context: String = context_json.chars().take(context_char_limit).collect();

    Ok(format!(
        "PERTANYAAN PENGGUNA:\n{}\nKONTEKS:\n{}",
        request.query, context
    ))
}

#[async_trait]
impl Summarizer for ChatSummarizer {
    async fn summarize(&self, request: &SummaryRequest) -> Result<String> {
        #[derive(Serialize)]
        struct ChatRequest {
            model: String,
            messages: Vec<ChatMessage>,
            temperature: f32,
            max_tokens: u32,
        }

        #[derive(Deserialize)]
        struct ChatResponse {
            choices: Vec<ChatChoice>,
        }

        #[derive(Deserialize)]
        struct ChatChoice {
            message: ChatMessage,
        }

        let chat_request = ChatRequest {
            model: self.model.clone(),
            messages: self.build_messages(request)?,
            temperature: 0.3,
            max_tokens: 256,
        };

        let url = format!("{}/v1/chat/completions", self.url);

        let mut req = self.http_client.post(&url).json(&chat_request);

        if let Some(ref api_key) = self.api_key {
            req = req.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = req.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LarisManisError::ExternalError(format!(
                "LLM service error (HTTP {}): {}",
                status, body
            )));
        }

        let chat_response: ChatResponse = response.json().await?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LarisManisError::Summarizer("No response from LLM".to_string()))?
            .message
            .content;

        let text = content.trim();
        if text.is_empty() {
            return Err(LarisManisError::Summarizer("empty text".to_string()));
        }

        Ok(text.to_string())
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{ProductContext, SummaryContext};

    fn request(product_count: usize) -> SummaryRequest {
        SummaryRequest {
            query: "soto murah".to_string(),
            context: SummaryContext {
                products: (0..product_count)
                    .map(|i| ProductContext {
                        id: i.to_string(),
                        name: format!("Soto Ayam {}", i),
                        category: "Makanan".to_string(),
                        price: 15000,
                        store_id: "s1".to_string(),
                        store_name: "Warung Soto".to_string(),
                        product_url: format!("/product/{}", i),
                        store_url: "/store/s1".to_string(),
                    })
                    .collect(),
            },
        }
    }

    #[test]
    fn test_user_prompt_layout() {
        let prompt = build_user_prompt(&request(1), 6000).unwrap();
        assert!(prompt.starts_with("PERTANYAAN PENGGUNA:\nsoto murah\nKONTEKS:\n"));
        assert!(prompt.contains("\"productUrl\":\"/product/0\""));
    }

    #[test]
    fn test_context_is_truncated() {
        let prompt = build_user_prompt(&request(200), 100).unwrap();
        let context = prompt.split("KONTEKS:\n").nth(1).unwrap();
        assert_eq!(context.chars().count(), 100);
    }

    #[test]
    fn test_messages_have_system_prompt() {
        let summarizer = ChatSummarizer::new(&SummarizerConfig::default()).unwrap();
        let messages = summarizer.build_messages(&request(2)).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert!(messages[0].content.contains("UMKM Laris Manis"));
        assert_eq!(messages[1].role, "user");
    }
}
