use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, ProductId};

/// Catalog product as served by the product API.
///
/// Read-only to this crate: the listing and the filter only look at products,
/// they never edit them. Unknown JSON fields (description, image, rating, ...)
/// are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
}

impl Product {
    /// Build a validated product.
    pub fn new(id: ProductId, title: impl Into<String>, price: f64) -> DomainResult<Self> {
        let product = Self {
            id,
            title: title.into(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    /// Check the record invariants (price must be a finite, non-negative number).
    pub fn validate(&self) -> DomainResult<()> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::validation(format!(
                "product {}: price must be a non-negative number (got {})",
                self.id, self.price
            )));
        }
        Ok(())
    }
}

/// The two attributes the product filter looks at.
pub trait Listable {
    fn title(&self) -> &str;
    fn price(&self) -> f64;
}

impl Listable for Product {
    fn title(&self) -> &str {
        &self.title
    }

    fn price(&self) -> f64 {
        self.price
    }
}
