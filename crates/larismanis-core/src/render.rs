//! Local rule-based rendering of assistant replies

use crate::catalog::Product;

/// Shown when nothing matched and no summary was generated
pub const NO_MATCH_MESSAGE: &str =
    "Tidak ada yang cocok. Coba ubah kata kunci atau batas harga/kalori.";

/// Shown under a generated summary when nothing matched
pub const NO_MATCH_IN_CATALOG_MESSAGE: &str = "Tidak ada yang cocok di katalog saat ini.";

/// Quick-reply prompts offered to buyers
pub const SUGGESTED_QUERIES: &[&str] = &[
    "Makanan berkuah",
    "Sembako promo",
    "Makanan kering",
    "Skincare murah",
];

/// Greeting listing the query styles the interpreter understands
pub fn greeting() -> String {
    [
        "Halo! Saya bisa bantu cari:",
        "  - Harga di bawah 30 ribu",
        "  - Kalori di bawah 100",
        "  - Kata kunci seperti \"es krim durian\"",
        "  - Rekomendasi termurah",
        "  - Keyword: makanan berkuah/kering, sembako promo, skincare murah",
    ]
    .join("\n")
}

/// Format a Rupiah amount with `.` thousands separators: `Rp 12.500`
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("Rp {}", grouped)
}

/// One result line: name, price and calories when known
pub fn product_line(product: &Product) -> String {
    match product.calories() {
        Some(calories) if calories > 0 => format!(
            "{} — {} • {} kkal",
            product.name,
            format_rupiah(product.price),
            calories
        ),
        _ => format!("{} — {}", product.name, format_rupiah(product.price)),
    }
}

/// Numbered list with product and store links
pub fn render_products(products: &[Product], empty_message: &str) -> String {
    if products.is_empty() {
        return format!("{}\n", empty_message);
    }

    let mut output = String::new();
    for (i, product) in products.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, product_line(product)));
        output.push_str(&format!(
            "   Lihat produk: {} · Kunjungi toko: {}\n",
            product.product_url(),
            product.store_url()
        ));
    }
    output
}

/// Full reply text: optional summary followed by the product list
pub fn render_reply(summary: Option<&str>, products: &[Product]) -> String {
    match summary {
        Some(text) => format!(
            "{}\n\n{}",
            text,
            render_products(products, NO_MATCH_IN_CATALOG_MESSAGE)
        ),
        None => render_products(products, NO_MATCH_MESSAGE),
    }
}
