//! Product matching over the catalog snapshot

mod matcher;

pub use matcher::{
    cheap_threshold, match_products, pipeline, Stage, CHEAP_THRESHOLD_BEAUTY,
    CHEAP_THRESHOLD_DEFAULT, CHEAP_THRESHOLD_FASHION, MAX_RESULTS,
};

use crate::catalog::Product;
use crate::query::{parse_query, ParsedQuery};

/// Parse `raw` and match it against `products` in one step
pub fn search<'a>(products: &'a [Product], raw: &str) -> (ParsedQuery, Vec<&'a Product>) {
    let parsed = parse_query(raw);
    let results = match_products(products, &parsed);
    (parsed, results)
}
