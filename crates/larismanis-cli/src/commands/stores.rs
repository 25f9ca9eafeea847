//! Stores command

use crate::app::{OutputFormat, StoresArgs};
use crate::output::format_stores;
use anyhow::Result;
use larismanis_core::Catalog;

pub fn run(args: StoresArgs, catalog: &Catalog, format: OutputFormat) -> Result<()> {
    let stores = catalog.browse_stores(&args.query.join(" "), args.category.as_deref());

    if stores.is_empty() && format != OutputFormat::Json {
        println!("No stores found");
        return Ok(());
    }

    print!("{}", format_stores(&stores, format));
    Ok(())
}
