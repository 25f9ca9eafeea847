//! Status command

use crate::app::OutputFormat;
use anyhow::Result;
use larismanis_core::{summarizer_from_config, Assistant, Catalog, Config};
use std::sync::Arc;

pub fn run(catalog: Catalog, config: &Config, format: OutputFormat) -> Result<()> {
    let stats = catalog.stats();
    let mut assistant = Assistant::new(Arc::new(catalog));
    if let Some(summarizer) = summarizer_from_config(&config.summarizer)? {
        assistant = assistant.with_summarizer(summarizer);
    }
    let health = assistant.health();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "health": health,
                "catalog": stats,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        _ => {
            println!("Status:          {}", if health.ok { "ok" } else { "error" });
            println!(
                "Summarizer:      {}",
                health.model.as_deref().unwrap_or("disabled")
            );
            println!();
            println!("Catalog:");
            println!("  Products:      {}", stats.product_count);
            println!("  Stores:        {}", stats.store_count);
            println!("  Categories:    {}", stats.category_count);
            println!("  Discounted:    {}", stats.discounted_count);
        }
    }
    Ok(())
}
