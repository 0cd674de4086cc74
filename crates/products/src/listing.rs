//! Product listing page state: "load more" pagination around the filter.
//!
//! The listing fetches the first `limit` products from a [`ProductSource`],
//! filters them client-side with its [`FilterEngine`] and derives the
//! empty-state and "load more" button state for rendering.

use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::{CatalogError, ProductPage, ProductSource, QueryParams};
use crate::filter::FilterEngine;
use crate::product::Product;

/// Empty-state banner shown in place of the product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyState {
    NoResults,
}

/// State of the "load more" button under the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadMoreState {
    /// Nothing was fetched; no button.
    Hidden,
    /// More products exist upstream.
    ShowMore,
    /// Everything is already fetched; button shown disabled.
    NoMore,
}

/// Everything a renderer needs for one frame of the listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingView<'a> {
    pub products: Vec<&'a Product>,
    pub has_active_filters: bool,
    pub empty_state: Option<EmptyState>,
    pub load_more: LoadMoreState,
    pub limit: u32,
    pub total: u64,
}

/// Listing page state for one mounted page.
#[derive(Debug, Clone)]
pub struct ProductListing {
    params: QueryParams,
    page_step: u32,
    filters: FilterEngine,
    page: ProductPage,
}

impl Default for ProductListing {
    fn default() -> Self {
        Self::new(QueryParams::default())
    }
}

impl ProductListing {
    /// New listing; each "load more" raises the limit by the initial limit.
    pub fn new(params: QueryParams) -> Self {
        Self {
            params,
            page_step: params.limit,
            filters: FilterEngine::new(),
            page: ProductPage::default(),
        }
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Last successfully fetched page (unfiltered).
    pub fn page(&self) -> &ProductPage {
        &self.page
    }

    pub fn filters(&self) -> &FilterEngine {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterEngine {
        &mut self.filters
    }

    /// Fetch with the current params.
    ///
    /// On failure the previously fetched page stays in place and the error is
    /// returned to the caller.
    pub fn refresh<S: ProductSource + ?Sized>(&mut self, source: &S) -> Result<&ProductPage, CatalogError> {
        match source.fetch(&self.params) {
            Ok(page) => {
                debug!(
                    limit = self.params.limit,
                    sort = self.params.sort.as_str(),
                    fetched = page.products.len(),
                    total = page.total,
                    "product page fetched"
                );
                self.page = page;
                Ok(&self.page)
            }
            Err(err) => {
                warn!(limit = self.params.limit, error = %err, "product page fetch failed");
                Err(err)
            }
        }
    }

    /// Raise the limit by one page and refetch.
    ///
    /// Returns `Ok(false)` without fetching when everything is already loaded.
    /// A failed fetch rolls the limit back so it keeps describing the page shown.
    pub fn load_more<S: ProductSource + ?Sized>(&mut self, source: &S) -> Result<bool, CatalogError> {
        if self.no_more_products() {
            return Ok(false);
        }

        let previous = self.params;
        self.params = previous.next_page(self.page_step);
        if let Err(err) = self.refresh(source).map(|_| ()) {
            self.params = previous;
            return Err(err);
        }
        Ok(true)
    }

    pub fn no_more_products(&self) -> bool {
        self.page.total <= u64::from(self.params.limit)
    }

    pub fn view(&self) -> ListingView<'_> {
        let products = self.filters.apply(&self.page.products);
        let empty_state = products.is_empty().then_some(EmptyState::NoResults);

        let load_more = if self.page.products.is_empty() {
            LoadMoreState::Hidden
        } else if self.no_more_products() {
            LoadMoreState::NoMore
        } else {
            LoadMoreState::ShowMore
        };

        ListingView {
            products,
            has_active_filters: self.filters.has_active_filters(),
            empty_state,
            load_more,
            limit: self.params.limit,
            total: self.page.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::catalog::{InMemoryCatalog, SortOrder};
    use crate::fixtures::{ids, numbered, product};

    /// Wraps a catalog, counting fetches and failing on demand.
    struct FlakySource {
        inner: InMemoryCatalog,
        fail: Cell<bool>,
        fetches: Cell<usize>,
    }

    impl FlakySource {
        fn new(inner: InMemoryCatalog) -> Self {
            Self {
                inner,
                fail: Cell::new(false),
                fetches: Cell::new(0),
            }
        }
    }

    impl ProductSource for FlakySource {
        fn fetch(&self, params: &QueryParams) -> Result<ProductPage, CatalogError> {
            self.fetches.set(self.fetches.get() + 1);
            if self.fail.get() {
                return Err(CatalogError::Unavailable("Internal Server Error".to_string()));
            }
            self.inner.fetch(params)
        }
    }

    #[test]
    fn first_refresh_loads_default_page() {
        let catalog = InMemoryCatalog::new(numbered(25)).unwrap();
        let mut listing = ProductListing::default();

        listing.refresh(&catalog).unwrap();
        let view = listing.view();

        assert_eq!(view.products.len(), 10);
        assert_eq!(view.limit, 10);
        assert_eq!(view.total, 25);
        assert_eq!(view.load_more, LoadMoreState::ShowMore);
        assert_eq!(view.empty_state, None);
        assert!(!view.has_active_filters);
    }

    #[test]
    fn load_more_steps_until_everything_is_fetched() {
        let source = FlakySource::new(InMemoryCatalog::new(numbered(25)).unwrap());
        let mut listing = ProductListing::default();
        listing.refresh(&source).unwrap();

        assert!(listing.load_more(&source).unwrap());
        assert_eq!(listing.params().limit, 20);
        assert_eq!(listing.view().load_more, LoadMoreState::ShowMore);

        assert!(listing.load_more(&source).unwrap());
        assert_eq!(listing.params().limit, 30);
        assert_eq!(listing.view().products.len(), 25);
        assert_eq!(listing.view().load_more, LoadMoreState::NoMore);

        let fetches = source.fetches.get();
        assert!(!listing.load_more(&source).unwrap());
        assert_eq!(source.fetches.get(), fetches);
        assert_eq!(listing.params().limit, 30);
    }

    #[test]
    fn exact_fit_means_no_more() {
        let catalog = InMemoryCatalog::new(numbered(10)).unwrap();
        let mut listing = ProductListing::default();
        listing.refresh(&catalog).unwrap();

        assert!(listing.no_more_products());
        assert_eq!(listing.view().load_more, LoadMoreState::NoMore);
    }

    #[test]
    fn custom_page_size_drives_the_step() {
        let catalog = InMemoryCatalog::new(numbered(12)).unwrap();
        let mut listing = ProductListing::new(QueryParams { limit: 5, sort: SortOrder::Desc });
        listing.refresh(&catalog).unwrap();
        assert_eq!(ids(&listing.view().products), vec![12, 11, 10, 9, 8]);

        listing.load_more(&catalog).unwrap();
        assert_eq!(listing.params().limit, 10);
        assert_eq!(listing.view().products.len(), 10);
    }

    #[test]
    fn filters_apply_to_fetched_page() {
        let catalog = InMemoryCatalog::new(vec![
            product(1, "Nike Running Shoes", 100.0),
            product(2, "Cotton T-Shirt", 20.0),
        ])
        .unwrap();
        let mut listing = ProductListing::default();
        listing.refresh(&catalog).unwrap();

        listing.filters_mut().set_name("shoes");
        let view = listing.view();
        assert_eq!(ids(&view.products), vec![1]);
        assert!(view.has_active_filters);
        assert_eq!(ids(&listing.page().products), vec![1, 2]);

        listing.filters_mut().reset();
        assert_eq!(ids(&listing.view().products), vec![1, 2]);
    }

    #[test]
    fn filter_survives_load_more() {
        let catalog = InMemoryCatalog::new(numbered(25)).unwrap();
        let mut listing = ProductListing::default();
        listing.refresh(&catalog).unwrap();
        listing.filters_mut().set_min_price(Some(150.0));

        assert!(listing.view().products.is_empty());

        listing.load_more(&catalog).unwrap();
        assert_eq!(ids(&listing.view().products), (15..=20).collect::<Vec<_>>());
        assert_eq!(listing.filters().state().min_price, Some(150.0));
    }

    #[test]
    fn filtered_to_nothing_shows_no_results() {
        let catalog = InMemoryCatalog::new(vec![product(1, "Budget Item", 50.0)]).unwrap();
        let mut listing = ProductListing::default();
        listing.refresh(&catalog).unwrap();

        listing.filters_mut().set_min_price(Some(500.0));
        let view = listing.view();

        assert!(view.products.is_empty());
        assert_eq!(view.empty_state, Some(EmptyState::NoResults));
        assert!(view.has_active_filters);
        assert_eq!(view.load_more, LoadMoreState::NoMore);
    }

    #[test]
    fn empty_catalog_hides_load_more() {
        let catalog = InMemoryCatalog::default();
        let mut listing = ProductListing::default();
        listing.refresh(&catalog).unwrap();

        let view = listing.view();
        assert_eq!(view.load_more, LoadMoreState::Hidden);
        assert_eq!(view.empty_state, Some(EmptyState::NoResults));
        assert!(!view.has_active_filters);
    }

    #[test]
    fn failed_refresh_keeps_previous_page() {
        let source = FlakySource::new(InMemoryCatalog::new(numbered(25)).unwrap());
        let mut listing = ProductListing::default();
        listing.refresh(&source).unwrap();

        source.fail.set(true);
        let err = listing.load_more(&source).unwrap_err();

        assert!(matches!(err, CatalogError::Unavailable(_)));
        assert_eq!(listing.params().limit, 10);
        assert_eq!(listing.view().products.len(), 10);
        assert_eq!(listing.view().load_more, LoadMoreState::ShowMore);

        source.fail.set(false);
        assert!(listing.load_more(&source).unwrap());
        assert_eq!(listing.params().limit, 20);
    }

    #[test]
    fn view_serializes_for_renderers() {
        let catalog = InMemoryCatalog::new(vec![product(1, "Nike Running Shoes", 100.0)]).unwrap();
        let mut listing = ProductListing::default();
        listing.refresh(&catalog).unwrap();

        let json = serde_json::to_value(listing.view()).unwrap();
        assert_eq!(json["products"][0]["title"], "Nike Running Shoes");
        assert_eq!(json["load_more"], "no_more");
        assert_eq!(json["empty_state"], serde_json::Value::Null);
        assert_eq!(json["has_active_filters"], false);
    }
}
