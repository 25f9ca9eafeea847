//! Buyer-facing shopping assistant
//!
//! Ties the pieces together: raw text → [`ParsedQuery`] → ranked matches →
//! optional generated summary. The summary is best-effort; when the
//! text-generation service is off, failing or silent the reply carries the
//! local result list only.

use crate::catalog::{Catalog, Product};
use crate::error::{LarisManisError, Result};
use crate::llm::{summarize, summary_cache_key, Summarizer, SummaryCache, SummaryRequest};
use crate::query::{parse_query, ParsedQuery};
use crate::render::render_reply;
use crate::search::match_products;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Where the reply text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    Summarizer,
    Local,
}

/// Assistant answer to one buyer message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub query: String,
    pub parsed: ParsedQuery,
    pub products: Vec<Product>,
    pub summary: Option<String>,
    pub source: ReplySource,
}

impl Reply {
    /// Render the reply as plain text
    pub fn render(&self) -> String {
        render_reply(self.summary.as_deref(), &self.products)
    }
}

/// Service health, as reported to monitoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub ok: bool,
    pub summarizer: bool,
    pub model: Option<String>,
    pub products: usize,
}

/// Shopping assistant over a catalog snapshot
pub struct Assistant {
    catalog: Arc<Catalog>,
    summarizer: Option<Arc<dyn Summarizer>>,
    cache: Option<SummaryCache>,
}

impl Assistant {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            summarizer: None,
            cache: None,
        }
    }

    /// Enrich replies with generated summaries
    pub fn with_summarizer(mut self, summarizer: Arc<dyn Summarizer>) -> Self {
        self.summarizer = Some(summarizer);
        self
    }

    /// Reuse summaries for repeated questions
    pub fn with_cache(mut self, cache: SummaryCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Answer a buyer message; blank input is rejected
    pub async fn ask(&self, raw: &str) -> Result<Reply> {
        if raw.trim().is_empty() {
            return Err(LarisManisError::InvalidInput("empty query".to_string()));
        }

        let parsed = parse_query(raw);
        let matches = match_products(self.catalog.products(), &parsed);

        tracing::info!(
            "Query '{}' matched {} products (max_price={:?}, categories={:?}, keywords={:?})",
            raw,
            matches.len(),
            parsed.max_price,
            parsed.category_hints,
            parsed.keywords
        );

        let summary = match &self.summarizer {
            Some(summarizer) => {
                let request = SummaryRequest::new(raw, matches.iter().copied());
                self.cached_summary(summarizer.as_ref(), &request).await
            }
            None => None,
        };

        let source = if summary.is_some() {
            ReplySource::Summarizer
        } else {
            ReplySource::Local
        };

        Ok(Reply {
            query: raw.to_string(),
            parsed,
            products: matches.into_iter().cloned().collect(),
            summary,
            source,
        })
    }

    async fn cached_summary(
        &self,
        summarizer: &dyn Summarizer,
        request: &SummaryRequest,
    ) -> Option<String> {
        let Some(cache) = &self.cache else {
            return summarize(summarizer, request).await;
        };

        let key = summary_cache_key(summarizer.model_name(), request);
        if let Some(cached) = cache.get(&key) {
            tracing::debug!("Cache hit for summary");
            return Some(cached);
        }

        let summary = summarize(summarizer, request).await?;
        cache.set(key, summary.clone());
        Some(summary)
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            ok: true,
            summarizer: self.summarizer.is_some(),
            model: self.summarizer.as_ref().map(|s| s.model_name().to_string()),
            products: self.catalog.products().len(),
        }
    }
}
