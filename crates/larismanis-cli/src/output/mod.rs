//! Output formatters

pub mod json;
pub mod markdown;
pub mod terminal;

use crate::app::OutputFormat;
use larismanis_core::{ParsedQuery, Product, Reply, Store};

/// Format an assistant reply
pub fn format_reply(reply: &Reply, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_reply(reply),
        OutputFormat::Md => markdown::format_reply(reply),
        OutputFormat::Cli => terminal::format_reply(reply),
    }
}

/// Format a product listing
pub fn format_products(products: &[&Product], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_products(products),
        OutputFormat::Md => markdown::format_products(products),
        OutputFormat::Cli => terminal::format_products(products),
    }
}

/// Format a store listing
pub fn format_stores(stores: &[&Store], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_stores(stores),
        OutputFormat::Md => markdown::format_stores(stores),
        OutputFormat::Cli => terminal::format_stores(stores),
    }
}

/// Format an interpreted query
pub fn format_parsed(parsed: &ParsedQuery, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_parsed(parsed),
        OutputFormat::Md | OutputFormat::Cli => terminal::format_parsed(parsed),
    }
}
