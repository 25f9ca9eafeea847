//! Parse command

use crate::app::{OutputFormat, ParseArgs};
use crate::output::format_parsed;
use anyhow::Result;
use larismanis_core::parse_query;

pub fn run(args: ParseArgs, format: OutputFormat) -> Result<()> {
    let parsed = parse_query(&args.query.join(" "));
    print!("{}", format_parsed(&parsed, format));
    Ok(())
}
