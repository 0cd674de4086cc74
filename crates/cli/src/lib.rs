//! `storefront-cli`
//!
//! Thin command-line shell around the product listing: loads a catalog file,
//! drives the listing (page size, sort, "load more", filters) and prints
//! the resulting view.

pub mod args;
pub mod commands;
pub mod config;
pub mod render;

pub use args::{Cli, Command, ListArgs};
pub use config::StorefrontConfig;
