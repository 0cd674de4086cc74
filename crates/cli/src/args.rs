use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use storefront_observability::LogFormat;
use storefront_products::SortOrder;

#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(about = "Browse a product catalog with client-side filters", version)]
pub struct Cli {
    /// Log line format: compact or json (overrides STOREFRONT_LOG)
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List catalog products through the filters
    List(ListArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// JSON file holding an array of products ({"id", "title", "price"})
    #[arg(long)]
    pub catalog: PathBuf,

    /// Keep products whose title contains this text (case-insensitive)
    #[arg(long, default_value = "")]
    pub name: String,

    /// Lower price bound; unparseable input means no bound
    #[arg(long, allow_hyphen_values = true)]
    pub min_price: Option<String>,

    /// Upper price bound; unparseable input means no bound
    #[arg(long, allow_hyphen_values = true)]
    pub max_price: Option<String>,

    /// Products per page (overrides STOREFRONT_PAGE_SIZE)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Sort by id: asc or desc (overrides STOREFRONT_SORT)
    #[arg(long)]
    pub sort: Option<SortOrder>,

    /// How many times to press "load more"
    #[arg(long, default_value_t = 0)]
    pub load_more: u32,

    /// Print the listing view as JSON
    #[arg(long)]
    pub json: bool,
}
