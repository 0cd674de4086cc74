use std::fs;

use anyhow::Context;
use tracing::info;

use storefront_products::{parse_price_input, InMemoryCatalog, ProductListing, QueryParams};

use crate::args::ListArgs;
use crate::config::StorefrontConfig;
use crate::render::render_listing;

/// Run `storefront list` and return what should be printed.
pub fn list(args: &ListArgs, config: &StorefrontConfig) -> anyhow::Result<String> {
    let raw = fs::read_to_string(&args.catalog)
        .with_context(|| format!("failed to read catalog {}", args.catalog.display()))?;
    let catalog = InMemoryCatalog::from_json(&raw)
        .with_context(|| format!("invalid catalog {}", args.catalog.display()))?;
    info!(path = %args.catalog.display(), products = catalog.len(), "catalog loaded");

    let params = QueryParams {
        limit: args.page_size.unwrap_or(config.page_size),
        sort: args.sort.unwrap_or(config.sort),
    };
    let mut listing = ProductListing::new(params);
    listing.refresh(&catalog).context("failed to fetch products")?;

    for _ in 0..args.load_more {
        if !listing.load_more(&catalog).context("failed to load more products")? {
            break;
        }
    }

    info!(
        fetched = listing.page().products.len(),
        limit = listing.params().limit,
        "products fetched"
    );

    let filters = listing.filters_mut();
    filters.set_name(args.name.as_str());
    filters.set_min_price(args.min_price.as_deref().and_then(parse_price_input));
    filters.set_max_price(args.max_price.as_deref().and_then(parse_price_input));

    let view = listing.view();
    info!(
        shown = view.products.len(),
        limit = view.limit,
        total = view.total,
        filtered = view.has_active_filters,
        "listing rendered"
    );

    if args.json {
        serde_json::to_string_pretty(&view).context("failed to serialize listing")
    } else {
        Ok(render_listing(&view))
    }
}
