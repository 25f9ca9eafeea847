//! Text-generation integration
//!
//! Provides the [`Summarizer`] boundary and its implementations:
//! - `HttpSummarizer` for a `{query, context}` → `{text}` chat proxy
//! - `ChatSummarizer` for OpenAI-compatible chat completion services
//!
//! The service is best-effort. [`summarize`] swallows every failure so the
//! caller can always fall back to the locally rendered result list.

mod cache;
mod chat_summarizer;
mod http_summarizer;
mod traits;

pub use cache::{summary_cache_key, CacheStats, SummaryCache};
pub use chat_summarizer::{ChatMessage, ChatSummarizer};
pub use http_summarizer::HttpSummarizer;
pub use traits::*;

use crate::config::{SummarizerConfig, SummarizerKind};
use crate::error::Result;
use std::sync::Arc;

/// Build the configured summarizer, or None when summaries are disabled
pub fn summarizer_from_config(config: &SummarizerConfig) -> Result<Option<Arc<dyn Summarizer>>> {
    if !config.enabled {
        return Ok(None);
    }

    let summarizer: Arc<dyn Summarizer> = match config.kind {
        SummarizerKind::Endpoint => Arc::new(HttpSummarizer::new(config)?),
        SummarizerKind::Chat => Arc::new(ChatSummarizer::new(config)?),
    };

    tracing::info!(
        "Summarizer enabled ({:?}) at {} with {}",
        config.kind,
        config.url,
        summarizer.model_name()
    );

    Ok(Some(summarizer))
}

/// Ask `summarizer` for a summary, returning None on any failure or blank text
pub async fn summarize(summarizer: &dyn Summarizer, request: &SummaryRequest) -> Option<String> {
    match summarizer.summarize(request).await {
        Ok(text) => {
            let text = text.trim();
            if text.is_empty() {
                tracing::warn!("Summarizer returned no text, using local rendering");
                None
            } else {
                Some(text.to_string())
            }
        }
        Err(e) => {
            tracing::warn!("Summarizer failed: {}, using local rendering", e);
            None
        }
    }
}
