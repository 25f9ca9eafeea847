//! Laris Manis Core Library
//!
//! Core functionality for the Laris Manis UMKM marketplace shopping assistant.
//!
//! # Features
//! - Rule-based interpretation of Indonesian buyer queries (price and
//!   calorie ceilings, categories, content tags, promo and "cheap" intent)
//! - Staged product matching over an immutable catalog snapshot
//! - Optional LLM-generated reply summaries with local fallback
//! - Rupiah-formatted local rendering of results

pub mod assistant;
pub mod catalog;
pub mod config;
pub mod error;
pub mod llm;
pub mod query;
pub mod render;
pub mod search;

pub use assistant::{Assistant, HealthStatus, Reply, ReplySource};
pub use catalog::{Catalog, CatalogStats, NutritionInfo, Product, Store};
pub use config::{Config, SummarizerConfig, SummarizerKind};
pub use error::{Error, LarisManisError, Result};
pub use llm::{
    summarize, summarizer_from_config, ChatSummarizer, HttpSummarizer, ProductContext,
    Summarizer, SummaryCache, SummaryRequest,
};
pub use query::{parse_query, ContentTag, ParsedQuery, SortBy};
pub use search::{match_products, search, MAX_RESULTS};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "larismanis";
