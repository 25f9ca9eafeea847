//! Integration tests for query interpretation and matching over the sample catalog

use larismanis_core::{match_products, parse_query, search, Catalog, ParsedQuery, MAX_RESULTS};
use std::path::PathBuf;

fn sample_catalog() -> Catalog {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/catalog.json");
    Catalog::load(&path).unwrap()
}

fn ids(catalog: &Catalog, raw: &str) -> Vec<String> {
    let (_, results) = search(catalog.products(), raw);
    results.iter().map(|p| p.id.clone()).collect()
}

#[test]
fn test_sample_catalog_loads() {
    let catalog = sample_catalog();
    let stats = catalog.stats();
    assert_eq!(stats.product_count, 20);
    assert_eq!(stats.store_count, 6);
    assert_eq!(stats.discounted_count, 3);
}

#[test]
fn test_soupy_food() {
    let catalog = sample_catalog();
    assert_eq!(ids(&catalog, "Makanan berkuah"), vec!["1", "2", "3"]);
}

#[test]
fn test_dry_food() {
    let catalog = sample_catalog();
    assert_eq!(ids(&catalog, "Makanan kering"), vec!["4", "5", "6"]);
}

#[test]
fn test_staples_on_promo() {
    let catalog = sample_catalog();
    assert_eq!(ids(&catalog, "Sembako promo"), vec!["7", "8"]);
}

#[test]
fn test_cheap_skincare_sorted_by_price() {
    let catalog = sample_catalog();
    assert_eq!(ids(&catalog, "Skincare murah"), vec!["16", "15", "14"]);
}

#[test]
fn test_keyword_search() {
    let catalog = sample_catalog();
    assert_eq!(ids(&catalog, "es krim durian"), vec!["11"]);
}

#[test]
fn test_cheapest_recommendation_uses_default_threshold() {
    let catalog = sample_catalog();
    // Ties keep catalog order
    assert_eq!(
        ids(&catalog, "rekomendasi termurah"),
        vec!["12", "4", "11", "1", "13"]
    );
}

#[test]
fn test_no_signal_returns_cheapest_five() {
    let catalog = sample_catalog();
    let results = match_products(catalog.products(), &ParsedQuery::default());
    assert_eq!(results.len(), MAX_RESULTS);
    let prices: Vec<u64> = results.iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![5000, 12000, 12000, 15000, 15000]);
}

#[test]
fn test_calorie_ceiling() {
    let catalog = sample_catalog();
    let query = ParsedQuery {
        max_calories: Some(200),
        ..Default::default()
    };
    let results: Vec<_> = match_products(catalog.products(), &query)
        .iter()
        .map(|p| p.id.clone())
        .collect();
    assert_eq!(results, vec!["4", "11", "12"]);
}

#[test]
fn test_explicit_price_beats_cheap_heuristic() {
    let catalog = sample_catalog();
    let parsed = parse_query("fashion termurah harga di bawah 500000");
    assert_eq!(parsed.max_price, Some(500_000));

    // Drop the residual numeric keyword to look at the price stages alone
    let query = ParsedQuery {
        keywords: vec![],
        ..parsed
    };
    let results: Vec<_> = match_products(catalog.products(), &query)
        .iter()
        .map(|p| p.id.clone())
        .collect();
    // The fashion heuristic (150.000) would have dropped the 350.000 shirt
    assert_eq!(results, vec!["19", "18"]);
}

#[test]
fn test_unknown_words_match_nothing() {
    let catalog = sample_catalog();
    assert!(ids(&catalog, "laptop gaming").is_empty());
}

#[test]
fn test_repeated_calls_are_identical() {
    let catalog = sample_catalog();
    for raw in ["Sembako promo", "skincare murah", "soto", "", "harga < 20000"] {
        assert_eq!(ids(&catalog, raw), ids(&catalog, raw));
    }
}
