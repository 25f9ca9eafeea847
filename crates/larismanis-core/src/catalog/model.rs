//! Product and store records as the storefront stores them

use serde::{Deserialize, Serialize};

/// Nutrition facts attached to food and beverage listings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f32>,
}

/// A catalog listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,

    /// Price in whole Rupiah
    pub price: u64,

    /// Pre-discount price; a value above `price` marks an active discount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u64>,

    pub store_id: String,
    pub store_name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition_info: Option<NutritionInfo>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Product {
    /// Lowercased text the matcher searches: name, category, store and description
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name, self.category, self.store_name, self.description
        )
        .to_lowercase()
    }

    /// True when an original price above the current price is present
    pub fn has_discount(&self) -> bool {
        self.original_price.is_some_and(|original| original > self.price)
    }

    pub fn calories(&self) -> Option<u32> {
        self.nutrition_info.as_ref().and_then(|n| n.calories)
    }

    pub fn product_url(&self) -> String {
        format!("/product/{}", self.id)
    }

    pub fn store_url(&self) -> String {
        format!("/store/{}", self.store_id)
    }
}

/// A seller's storefront
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Store {
    pub fn store_url(&self) -> String {
        format!("/store/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: u64, original_price: Option<u64>) -> Product {
        Product {
            id: "p1".to_string(),
            name: "Soto Ayam Lamongan".to_string(),
            category: "Makanan".to_string(),
            price,
            original_price,
            store_id: "s1".to_string(),
            store_name: "Warung Bu Sri".to_string(),
            description: "Kuah Kuning Gurih".to_string(),
            image: None,
            stock: None,
            rating: None,
            nutrition_info: None,
            tags: vec![],
        }
    }

    #[test]
    fn test_search_text_is_lowercased() {
        let p = product(15000, None);
        assert_eq!(
            p.search_text(),
            "soto ayam lamongan makanan warung bu sri kuah kuning gurih"
        );
    }

    #[test]
    fn test_has_discount() {
        assert!(product(15000, Some(20000)).has_discount());
        assert!(!product(15000, Some(15000)).has_discount());
        assert!(!product(15000, None).has_discount());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "7",
            "name": "Es Teh",
            "category": "Minuman",
            "price": 5000,
            "originalPrice": 7000,
            "storeId": "s2",
            "storeName": "Kedai Segar",
            "nutritionInfo": { "calories": 90 }
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.original_price, Some(7000));
        assert_eq!(p.calories(), Some(90));
        assert_eq!(p.description, "");
        assert_eq!(p.product_url(), "/product/7");
        assert_eq!(p.store_url(), "/store/s2");
    }
}
