//! Laris Manis CLI
//!
//! Ask the UMKM catalog shopping assistant from the terminal.

use anyhow::Result;
use clap::Parser;
use larismanis_core::error::exit_codes;
use larismanis_core::{Catalog, Config, LarisManisError};
use std::path::Path;

mod app;
mod commands;
mod output;

use app::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        let code = e
            .downcast_ref::<LarisManisError>()
            .map(LarisManisError::exit_code)
            .unwrap_or(exit_codes::GENERAL_ERROR);
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let catalog_flag = cli.catalog.as_deref();

    match cli.command {
        Commands::Ask(args) => {
            let catalog = load_catalog(&config, catalog_flag)?;
            commands::ask::run(args, catalog, &config, cli.format).await
        }
        Commands::Parse(args) => commands::parse::run(args, cli.format),
        Commands::Products(args) => {
            commands::products::run(args, &load_catalog(&config, catalog_flag)?, cli.format)
        }
        Commands::Stores(args) => {
            commands::stores::run(args, &load_catalog(&config, catalog_flag)?, cli.format)
        }
        Commands::Status => {
            let catalog = load_catalog(&config, catalog_flag)?;
            commands::status::run(catalog, &config, cli.format)
        }
        Commands::Suggest => commands::suggest::run(cli.format),
    }
}

fn load_catalog(config: &Config, explicit: Option<&Path>) -> Result<Catalog> {
    let path = config.resolve_catalog_path(explicit)?;
    let catalog = Catalog::load(&path)?;
    tracing::info!("Catalog {}: {} products", path.display(), catalog.products().len());
    Ok(catalog)
}
