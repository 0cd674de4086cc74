//! Plain-text rendering of a listing view.

use storefront_products::{EmptyState, ListingView, LoadMoreState};

pub const NO_RESULTS: &str = "No results found";

pub fn render_listing(view: &ListingView<'_>) -> String {
    let mut out = String::new();

    for product in &view.products {
        out.push_str(&format!(
            "#{:<5} {:<48} {:>10.2}\n",
            product.id, product.title, product.price
        ));
    }

    if let Some(EmptyState::NoResults) = view.empty_state {
        out.push_str(NO_RESULTS);
        out.push('\n');
    }

    out.push_str(&format!(
        "-- {} shown (limit {}, {} in catalog)",
        view.products.len(),
        view.limit,
        view.total
    ));
    if view.has_active_filters {
        out.push_str(" [filters active]");
    }
    out.push('\n');

    match view.load_more {
        LoadMoreState::Hidden => {}
        LoadMoreState::ShowMore => out.push_str("-- load more: available\n"),
        LoadMoreState::NoMore => out.push_str("-- load more: no more products\n"),
    }

    out
}
