//! Catalog matcher: staged filter pipeline over the product snapshot

use crate::catalog::Product;
use crate::query::{category, ContentTag, ParsedQuery, SortBy};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

/// Maximum number of products returned by a match
pub const MAX_RESULTS: usize = 5;

/// Cheap threshold for beauty / skincare queries
pub const CHEAP_THRESHOLD_BEAUTY: u64 = 200_000;

/// Cheap threshold for fashion queries
pub const CHEAP_THRESHOLD_FASHION: u64 = 150_000;

/// Cheap threshold for general-store queries and the default
pub const CHEAP_THRESHOLD_DEFAULT: u64 = 30_000;

const PROMO_WORDS: &[&str] = &["promo", "diskon", "voucher"];

lazy_static! {
    static ref SOUPY_RE: Regex = Regex::new(r"kuah|berkuah|sop|soto|rawon").unwrap();
    static ref DRY_RE: Regex =
        Regex::new(r"kering|goreng|keripik|kerupuk|serundeng|kremes").unwrap();
    static ref STAPLES_RE: Regex = Regex::new(r"beras|minyak|gula|kecap|mie|telur").unwrap();
}

/// One filter of the pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum Stage<'q> {
    Category(&'q BTreeSet<String>),
    MaxPrice(u64),
    MaxCalories(u64),
    Promo,
    Tag(ContentTag),
    Keywords(&'q [String]),
    CheapThreshold(u64),
}

impl Stage<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Category(_) => "category",
            Self::MaxPrice(_) => "max_price",
            Self::MaxCalories(_) => "max_calories",
            Self::Promo => "promo",
            Self::Tag(ContentTag::Berkuah) => "tag:berkuah",
            Self::Tag(ContentTag::Kering) => "tag:kering",
            Self::Tag(ContentTag::Sembako) => "tag:sembako",
            Self::Keywords(_) => "keywords",
            Self::CheapThreshold(_) => "cheap_threshold",
        }
    }

    /// Whether `product` survives this stage; `text` is its search text
    fn keeps(&self, product: &Product, text: &str) -> bool {
        match self {
            Self::Category(hints) => hints.contains(&product.category),
            Self::MaxPrice(max) | Self::CheapThreshold(max) => product.price <= *max,
            // A missing calorie count never satisfies a ceiling
            Self::MaxCalories(max) => product.calories().is_some_and(|c| u64::from(c) <= *max),
            Self::Promo => {
                PROMO_WORDS.iter().any(|w| text.contains(w)) || product.has_discount()
            }
            Self::Tag(ContentTag::Berkuah) => SOUPY_RE.is_match(text),
            Self::Tag(ContentTag::Kering) => DRY_RE.is_match(text),
            Self::Tag(ContentTag::Sembako) => {
                text.contains("sembako")
                    || product.category == category::TOSERBA
                    || STAPLES_RE.is_match(text)
            }
            Self::Keywords(keywords) => keywords.iter().all(|k| text.contains(k.as_str())),
        }
    }
}

/// Price ceiling implied by cheap wording, chosen by category priority
pub fn cheap_threshold(query: &ParsedQuery) -> u64 {
    if query.skincare_hint || query.has_category(category::KECANTIKAN) {
        CHEAP_THRESHOLD_BEAUTY
    } else if query.has_category(category::FASHION) {
        CHEAP_THRESHOLD_FASHION
    } else {
        CHEAP_THRESHOLD_DEFAULT
    }
}

/// Ordered filter stages triggered by `query`
pub fn pipeline(query: &ParsedQuery) -> Vec<Stage<'_>> {
    let mut stages = Vec::new();

    if !query.category_hints.is_empty() {
        stages.push(Stage::Category(&query.category_hints));
    }
    if let Some(max) = query.max_price {
        stages.push(Stage::MaxPrice(max));
    }
    if let Some(max) = query.max_calories {
        stages.push(Stage::MaxCalories(max));
    }
    if query.promo_only {
        stages.push(Stage::Promo);
    }
    for tag in [ContentTag::Berkuah, ContentTag::Kering, ContentTag::Sembako] {
        if query.has_tag(tag) {
            stages.push(Stage::Tag(tag));
        }
    }
    if !query.keywords.is_empty() {
        stages.push(Stage::Keywords(&query.keywords));
    }
    // An explicit price ceiling always wins over the heuristic
    if query.cheap_hint && query.max_price.is_none() {
        stages.push(Stage::CheapThreshold(cheap_threshold(query)));
    }

    stages
}

/// Match `products` against `query`.
///
/// Stages narrow the working set in order, the survivors are sorted by
/// ascending price when the query asks for it (or carries no filtering
/// signal at all), and at most [`MAX_RESULTS`] products are returned.
/// The input slice is never modified.
pub fn match_products<'a>(products: &'a [Product], query: &ParsedQuery) -> Vec<&'a Product> {
    let mut working: Vec<(&Product, String)> =
        products.iter().map(|p| (p, p.search_text())).collect();

    for stage in pipeline(query) {
        working.retain(|(product, text)| stage.keeps(product, text));
        tracing::debug!("Stage '{}' applied: {} products remain", stage.name(), working.len());
    }

    let mut results: Vec<&Product> = working.into_iter().map(|(p, _)| p).collect();

    if query.sort_by == Some(SortBy::Price) || !query.has_signal() {
        results.sort_by_key(|p| p.price);
    }

    results.truncate(MAX_RESULTS);
    results
}
