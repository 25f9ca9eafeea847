//! Products command

use crate::app::{OutputFormat, ProductsArgs};
use crate::output::format_products;
use anyhow::Result;
use larismanis_core::{Catalog, Product};

pub fn run(args: ProductsArgs, catalog: &Catalog, format: OutputFormat) -> Result<()> {
    let term = args.query.join(" ");
    let mut products: Vec<&Product> = catalog.browse_products(&term, args.category.as_deref());

    if let Some(ref store_id) = args.store {
        catalog.store(store_id)?;
        products.retain(|p| &p.store_id == store_id);
    }

    if products.is_empty() && format != OutputFormat::Json {
        println!("No products found");
        return Ok(());
    }

    print!("{}", format_products(&products, format));
    Ok(())
}
