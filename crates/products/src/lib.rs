//! Products listing module.
//!
//! This crate contains the client-side product listing logic: the product
//! filter, price input coercion, the product source seam and the "load more"
//! listing page state. Everything here is deterministic and synchronous
//! (no IO, no HTTP, no rendering).

pub mod catalog;
pub mod filter;
pub mod listing;
pub mod price_input;
pub mod product;

#[cfg(test)]
pub(crate) mod fixtures;

pub use catalog::{CatalogError, DEFAULT_PAGE_SIZE, InMemoryCatalog, ProductPage, ProductSource, QueryParams, SortOrder};
pub use filter::{FilterEngine, FilterState};
pub use listing::{EmptyState, ListingView, LoadMoreState, ProductListing};
pub use price_input::parse_price_input;
pub use product::{Listable, Product};
