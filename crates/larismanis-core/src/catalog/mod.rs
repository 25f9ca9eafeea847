//! In-memory product catalog
//!
//! The catalog is an immutable snapshot: it is loaded once and only read
//! afterwards, so it can be shared freely between concurrent requests.

mod model;

pub use model::{NutritionInfo, Product, Store};

use crate::error::{LarisManisError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

/// On-disk catalog layouts: a full export or a bare product list
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Full {
        products: Vec<Product>,
        #[serde(default)]
        stores: Vec<Store>,
    },
    Products(Vec<Product>),
}

/// Catalog summary counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub product_count: usize,
    pub store_count: usize,
    pub category_count: usize,
    pub discounted_count: usize,
}

/// Read-only snapshot of products and stores
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    stores: Vec<Store>,
}

impl Catalog {
    /// Create a catalog, rejecting duplicate product ids
    pub fn new(products: Vec<Product>, stores: Vec<Store>) -> Result<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(LarisManisError::Catalog(format!(
                    "duplicate product id: {}",
                    product.id
                )));
            }
        }

        Ok(Self { products, stores })
    }

    /// Parse a catalog from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        match serde_json::from_str::<CatalogFile>(json)? {
            CatalogFile::Full { products, stores } => Self::new(products, stores),
            CatalogFile::Products(products) => Self::new(products, Vec::new()),
        }
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;
        tracing::debug!(
            "Loaded catalog from {}: {} products, {} stores",
            path.display(),
            catalog.products.len(),
            catalog.stores.len()
        );
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    /// Look up a product by id
    pub fn product(&self, id: &str) -> Result<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| LarisManisError::ProductNotFound(id.to_string()))
    }

    /// Look up a store by id
    pub fn store(&self, id: &str) -> Result<&Store> {
        self.stores
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| LarisManisError::StoreNotFound(id.to_string()))
    }

    /// Products whose name or store name contains `term` (case-insensitive),
    /// optionally restricted to one category. An empty term matches everything.
    pub fn browse_products(&self, term: &str, category: Option<&str>) -> Vec<&Product> {
        let term = term.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&term)
                    || p.store_name.to_lowercase().contains(&term)
            })
            .filter(|p| in_category(Some(p.category.as_str()), category))
            .collect()
    }

    /// Stores whose name or description contains `term`, optionally
    /// restricted to one category
    pub fn browse_stores(&self, term: &str, category: Option<&str>) -> Vec<&Store> {
        let term = term.trim().to_lowercase();
        self.stores
            .iter()
            .filter(|s| {
                s.name.to_lowercase().contains(&term)
                    || s.description.to_lowercase().contains(&term)
            })
            .filter(|s| in_category(s.category.as_deref(), category))
            .collect()
    }

    /// Distinct product categories, sorted
    pub fn categories(&self) -> Vec<&str> {
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            product_count: self.products.len(),
            store_count: self.stores.len(),
            category_count: self.categories().len(),
            discounted_count: self.products.iter().filter(|p| p.has_discount()).count(),
        }
    }
}

fn in_category(actual: Option<&str>, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => actual.is_some_and(|a| a.eq_ignore_ascii_case(wanted)),
    }
}
