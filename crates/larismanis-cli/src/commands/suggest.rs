//! Suggest command

use crate::app::OutputFormat;
use anyhow::Result;
use larismanis_core::render::{greeting, SUGGESTED_QUERIES};

pub fn run(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "greeting": greeting(),
                "suggestions": SUGGESTED_QUERIES,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Md => {
            println!("{}", greeting());
            println!();
            for query in SUGGESTED_QUERIES {
                println!("- `{}`", query);
            }
        }
        OutputFormat::Cli => {
            println!("{}", greeting());
            println!();
            println!("Coba: {}", SUGGESTED_QUERIES.join(" | "));
        }
    }
    Ok(())
}
