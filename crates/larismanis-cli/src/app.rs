//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "larismanis")]
#[command(
    author,
    version,
    about = "Shopping assistant for the Laris Manis UMKM marketplace"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Catalog JSON file
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask the shopping assistant
    Ask(AskArgs),

    /// Show how a query is interpreted
    Parse(ParseArgs),

    /// List catalog products
    Products(ProductsArgs),

    /// List stores
    Stores(StoresArgs),

    /// Show assistant health and catalog stats
    Status,

    /// Show the greeting and suggested queries
    Suggest,
}

#[derive(Args)]
pub struct AskArgs {
    /// Buyer question, e.g. "skincare murah"
    pub query: Vec<String>,

    /// Skip the text-generation service even when configured
    #[arg(long)]
    pub local: bool,
}

#[derive(Args)]
pub struct ParseArgs {
    /// Buyer question
    pub query: Vec<String>,
}

#[derive(Args)]
pub struct ProductsArgs {
    /// Match product or store names containing this text
    pub query: Vec<String>,

    /// Only products of this store
    #[arg(long)]
    pub store: Option<String>,

    /// Only products of this category
    #[arg(short, long)]
    pub category: Option<String>,
}

#[derive(Args)]
pub struct StoresArgs {
    /// Match store names or descriptions containing this text
    pub query: Vec<String>,

    /// Only stores of this category
    #[arg(short, long)]
    pub category: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
    Md,
}
