//! CLI command handlers

pub mod ask;
pub mod parse;
pub mod products;
pub mod status;
pub mod stores;
pub mod suggest;
