//! Client-side product filter.
//!
//! Three optional criteria (title substring, minimum price, maximum price)
//! are ANDed together over an in-memory product sequence. The filter owns
//! only its criteria; the products are always passed in by the caller and
//! are never retained between calls.

use serde::{Deserialize, Serialize};
use tracing::debug;

use storefront_core::ValueObject;

use crate::product::Listable;

/// Current filter criteria.
///
/// An empty `name` and absent price bounds mean "no constraint". The default
/// value is the only state with no active filter. Bounds are not reconciled:
/// `min_price > max_price` is allowed and simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub name: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl ValueObject for FilterState {}

impl FilterState {
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    pub fn with_min_price(self, min_price: Option<f64>) -> Self {
        Self { min_price, ..self }
    }

    pub fn with_max_price(self, max_price: Option<f64>) -> Self {
        Self { max_price, ..self }
    }

    /// True iff any field differs from its default.
    pub fn is_active(&self) -> bool {
        !self.name.is_empty() || self.min_price.is_some() || self.max_price.is_some()
    }

    /// Check a single item against all three criteria.
    pub fn matches<T: Listable + ?Sized>(&self, item: &T) -> bool {
        Matcher::new(self).matches(item)
    }
}

/// Criteria prepared for a pass over many items (the name is case-folded once).
struct Matcher {
    needle: Option<String>,
    min_price: Option<f64>,
    max_price: Option<f64>,
}

impl Matcher {
    fn new(state: &FilterState) -> Self {
        Self {
            needle: (!state.name.is_empty()).then(|| state.name.to_lowercase()),
            min_price: state.min_price,
            max_price: state.max_price,
        }
    }

    fn matches<T: Listable + ?Sized>(&self, item: &T) -> bool {
        let price = item.price();

        let matches_name = match &self.needle {
            Some(needle) => item.title().to_lowercase().contains(needle.as_str()),
            None => true,
        };
        let matches_min_price = self.min_price.is_none_or(|min| price >= min);
        let matches_max_price = self.max_price.is_none_or(|max| price <= max);

        matches_name && matches_min_price && matches_max_price
    }
}

/// Owner of the filter criteria for one active listing.
///
/// Every mutator builds a new [`FilterState`] and swaps it in whole.
/// `&mut self` makes this the single writer; readers only ever see a
/// complete state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterEngine {
    state: FilterState,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current criteria (used to populate form controls).
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Replace all criteria at once.
    pub fn set_filters(&mut self, state: FilterState) {
        self.replace(state);
    }

    /// Replace the name criterion. Stored as given: no trimming, no case folding.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let next = std::mem::take(&mut self.state).with_name(name);
        self.replace(next);
    }

    /// Replace the lower price bound.
    ///
    /// Callers coerce unparseable input to `None` first
    /// (see [`crate::parse_price_input`]).
    pub fn set_min_price(&mut self, min_price: Option<f64>) {
        let next = std::mem::take(&mut self.state).with_min_price(min_price);
        self.replace(next);
    }

    /// Replace the upper price bound.
    pub fn set_max_price(&mut self, max_price: Option<f64>) {
        let next = std::mem::take(&mut self.state).with_max_price(max_price);
        self.replace(next);
    }

    pub fn reset(&mut self) {
        self.replace(FilterState::default());
    }

    pub fn has_active_filters(&self) -> bool {
        self.state.is_active()
    }

    /// Ordered subsequence of `products` matching every active criterion.
    ///
    /// Single pass; the input is neither mutated nor retained.
    pub fn apply<'a, T: Listable>(&self, products: &'a [T]) -> Vec<&'a T> {
        let matcher = Matcher::new(&self.state);
        products.iter().filter(|p| matcher.matches(*p)).collect()
    }

    fn replace(&mut self, next: FilterState) {
        debug!(
            name = %next.name,
            min_price = ?next.min_price,
            max_price = ?next.max_price,
            active = next.is_active(),
            "product filters updated"
        );
        self.state = next;
    }
}
