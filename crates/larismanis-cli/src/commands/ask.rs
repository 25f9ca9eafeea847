//! Ask command

use crate::app::{AskArgs, OutputFormat};
use crate::output::format_reply;
use anyhow::Result;
use larismanis_core::{summarizer_from_config, Assistant, Catalog, Config, SummaryCache};
use std::sync::Arc;
use std::time::Duration;

pub async fn run(
    args: AskArgs,
    catalog: Catalog,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let query = args.query.join(" ");
    let assistant = build_assistant(catalog, config, args.local)?;

    let reply = assistant.ask(&query).await?;
    print!("{}", format_reply(&reply, format));
    Ok(())
}

fn build_assistant(catalog: Catalog, config: &Config, local: bool) -> Result<Assistant> {
    let mut assistant = Assistant::new(Arc::new(catalog));
    if local {
        return Ok(assistant);
    }

    if let Some(summarizer) = summarizer_from_config(&config.summarizer)? {
        tracing::info!("Summaries via {}", summarizer.model_name());
        let ttl = Duration::from_secs(config.summarizer.cache_ttl_secs);
        assistant = assistant
            .with_summarizer(summarizer)
            .with_cache(SummaryCache::with_ttl(ttl));
    }
    Ok(assistant)
}
