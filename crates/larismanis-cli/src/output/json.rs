//! JSON output formatter

use larismanis_core::{ParsedQuery, Product, Reply, Store};
use serde::Serialize;

fn to_json<T: Serialize + ?Sized>(value: &T, fallback: &str) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| fallback.to_string()) + "\n"
}

pub fn format_reply(reply: &Reply) -> String {
    to_json(reply, "{}")
}

pub fn format_products(products: &[&Product]) -> String {
    to_json(products, "[]")
}

pub fn format_stores(stores: &[&Store]) -> String {
    to_json(stores, "[]")
}

pub fn format_parsed(parsed: &ParsedQuery) -> String {
    to_json(parsed, "{}")
}
