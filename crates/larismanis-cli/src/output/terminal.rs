//! Terminal output formatter

use larismanis_core::render::{format_rupiah, product_line};
use larismanis_core::{ParsedQuery, Product, Reply, Store};

pub fn format_reply(reply: &Reply) -> String {
    reply.render()
}

pub fn format_products(products: &[&Product]) -> String {
    let mut output = String::new();
    for product in products {
        let discount = match product.original_price {
            Some(original) if product.has_discount() => {
                format!(" (dari {})", format_rupiah(original))
            }
            _ => String::new(),
        };
        output.push_str(&format!(
            "{:>4}  {}{}  [{}] @ {}\n",
            product.id,
            product_line(product),
            discount,
            product.category,
            product.store_name
        ));
    }
    output
}

pub fn format_stores(stores: &[&Store]) -> String {
    let mut output = String::new();
    for store in stores {
        output.push_str(&format!("{:>4}  {}", store.id, store.name));
        if let Some(ref category) = store.category {
            output.push_str(&format!("  [{}]", category));
        }
        output.push_str(&format!("  {}\n", store.store_url()));
    }
    output
}

pub fn format_parsed(parsed: &ParsedQuery) -> String {
    let join = |items: Vec<&str>| {
        if items.is_empty() {
            "-".to_string()
        } else {
            items.join(", ")
        }
    };
    let amount = |value: Option<u64>| value.map_or("-".to_string(), |v| v.to_string());

    let mut output = String::new();
    output.push_str(&format!("Max price:     {}\n", amount(parsed.max_price)));
    output.push_str(&format!("Max calories:  {}\n", amount(parsed.max_calories)));
    output.push_str(&format!(
        "Categories:    {}\n",
        join(parsed.category_hints.iter().map(String::as_str).collect())
    ));
    output.push_str(&format!(
        "Tags:          {}\n",
        join(parsed.tags.iter().map(|t| t.as_str()).collect())
    ));
    output.push_str(&format!(
        "Keywords:      {}\n",
        join(parsed.keywords.iter().map(String::as_str).collect())
    ));
    output.push_str(&format!("Promo only:    {}\n", parsed.promo_only));
    output.push_str(&format!("Cheap:         {}\n", parsed.cheap_hint));
    output.push_str(&format!("Skincare:      {}\n", parsed.skincare_hint));
    output.push_str(&format!("Sort by price: {}\n", parsed.sort_by.is_some()));
    output
}
