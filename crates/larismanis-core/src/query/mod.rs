//! Buyer query intent
//!
//! Data structures for the structured filters extracted from a free-text
//! (Indonesian) shopping question. Extraction itself lives in [`parser`].

mod parser;

pub use parser::{parse_query, STOP_WORDS};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Canonical catalog category names
pub mod category {
    pub const KECANTIKAN: &str = "Kecantikan";
    pub const MAKANAN: &str = "Makanan";
    pub const MINUMAN: &str = "Minuman";
    pub const FASHION: &str = "Fashion";
    pub const AKSESORIS: &str = "Aksesoris";
    pub const KERAJINAN: &str = "Kerajinan";
    pub const TOSERBA: &str = "Toserba";
}

/// Coarse food-texture / staples classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentTag {
    /// Soupy dishes (soto, sop, rawon)
    Berkuah,

    /// Dry or fried food (keripik, kerupuk, goreng)
    Kering,

    /// Household staples (beras, minyak, gula)
    Sembako,
}

impl ContentTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Berkuah => "berkuah",
            Self::Kering => "kering",
            Self::Sembako => "sembako",
        }
    }
}

/// Result ordering requested by the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Ascending price
    Price,
}

/// Parsed query with extracted intent and filters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuery {
    /// Inclusive price ceiling in Rupiah
    pub max_price: Option<u64>,

    /// Inclusive calorie ceiling
    pub max_calories: Option<u64>,

    pub sort_by: Option<SortBy>,

    /// Residual free-text tokens, in input order
    pub keywords: Vec<String>,

    /// Canonical category names mentioned in the query
    pub category_hints: BTreeSet<String>,

    pub tags: BTreeSet<ContentTag>,

    /// Promotional wording (promo, diskon, voucher, gratis) was present
    pub promo_only: bool,

    /// "Cheap" or recommendation wording was present
    pub cheap_hint: bool,

    /// The word "skincare" was present; raises the cheap threshold
    pub skincare_hint: bool,
}

impl ParsedQuery {
    pub fn has_tag(&self, tag: ContentTag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.category_hints.contains(category)
    }

    /// True when any filtering signal was extracted.
    ///
    /// `sort_by`, `cheap_hint` and `skincare_hint` do not count.
    pub fn has_signal(&self) -> bool {
        self.max_price.is_some()
            || self.max_calories.is_some()
            || !self.keywords.is_empty()
            || self.promo_only
            || !self.tags.is_empty()
            || !self.category_hints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_signal() {
        assert!(!ParsedQuery::default().has_signal());
    }

    #[test]
    fn test_cheap_hint_alone_is_not_a_signal() {
        let query = ParsedQuery {
            sort_by: Some(SortBy::Price),
            cheap_hint: true,
            ..Default::default()
        };
        assert!(!query.has_signal());
    }

    #[test]
    fn test_serialize_tags_lowercase() {
        let mut query = ParsedQuery::default();
        query.tags.insert(ContentTag::Berkuah);
        query.sort_by = Some(SortBy::Price);
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["tags"], serde_json::json!(["berkuah"]));
        assert_eq!(json["sort_by"], "price");
    }
}
