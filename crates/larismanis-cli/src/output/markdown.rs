//! Markdown output formatter

use larismanis_core::render::{format_rupiah, NO_MATCH_IN_CATALOG_MESSAGE, NO_MATCH_MESSAGE};
use larismanis_core::{Product, Reply, Store};

pub fn format_reply(reply: &Reply) -> String {
    let mut output = String::new();

    if let Some(ref summary) = reply.summary {
        output.push_str(summary);
        output.push_str("\n\n");
    }

    if reply.products.is_empty() {
        let message = if reply.summary.is_some() {
            NO_MATCH_IN_CATALOG_MESSAGE
        } else {
            NO_MATCH_MESSAGE
        };
        output.push_str(&format!("_{}_\n", message));
        return output;
    }

    for (i, product) in reply.products.iter().enumerate() {
        output.push_str(&format!(
            "{}. **{}** — {}",
            i + 1,
            product.name,
            format_rupiah(product.price)
        ));
        if let Some(calories) = product.calories().filter(|c| *c > 0) {
            output.push_str(&format!(" • {} kkal", calories));
        }
        output.push_str(&format!(
            " ([produk]({}) · [toko]({}))\n",
            product.product_url(),
            product.store_url()
        ));
    }
    output
}

pub fn format_products(products: &[&Product]) -> String {
    let mut output = String::from("| ID | Produk | Kategori | Harga | Toko |\n");
    output.push_str("|----|--------|----------|-------|------|\n");
    for product in products {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            product.id,
            product.name,
            product.category,
            format_rupiah(product.price),
            product.store_name
        ));
    }
    output
}

pub fn format_stores(stores: &[&Store]) -> String {
    let mut output = String::from("| ID | Toko | Kategori |\n");
    output.push_str("|----|------|----------|\n");
    for store in stores {
        output.push_str(&format!(
            "| {} | {} | {} |\n",
            store.id,
            store.name,
            store.category.as_deref().unwrap_or("-")
        ));
    }
    output
}
