//! Summarizer trait and wire types

use crate::catalog::Product;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Text-generation collaborator that writes a short intro for a result list
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Generate a summary; blank text is reported as an error
    async fn summarize(&self, request: &SummaryRequest) -> Result<String>;

    /// Get model name
    fn model_name(&self) -> &str;
}

/// Product projection sent to the summarizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductContext {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: u64,
    pub store_id: String,
    pub store_name: String,
    pub product_url: String,
    pub store_url: String,
}

impl From<&Product> for ProductContext {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            category: p.category.clone(),
            price: p.price,
            store_id: p.store_id.clone(),
            store_name: p.store_name.clone(),
            product_url: p.product_url(),
            store_url: p.store_url(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryContext {
    pub products: Vec<ProductContext>,
}

/// Request body: the raw buyer text plus the ranked matches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub query: String,
    pub context: SummaryContext,
}

impl SummaryRequest {
    pub fn new<'a>(query: &str, products: impl IntoIterator<Item = &'a Product>) -> Self {
        Self {
            query: query.to_string(),
            context: SummaryContext {
                products: products.into_iter().map(ProductContext::from).collect(),
            },
        }
    }

    /// Ids of the products in context, in rank order
    pub fn product_ids(&self) -> impl Iterator<Item = &str> {
        self.context.products.iter().map(|p| p.id.as_str())
    }
}

/// Response body; `text` may be missing or empty
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryResponse {
    #[serde(default)]
    pub text: Option<String>,
}
