//! Product source abstraction (the data-fetching collaborator).

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use storefront_core::{DomainError, ValueObject};

use crate::product::Product;

/// Products fetched per "load more" step and on the first fetch.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Sort order by product id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(DomainError::validation(format!(
                "sort order must be `asc` or `desc` (got `{other}`)"
            ))),
        }
    }
}

/// Listing query params sent to the product source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    pub limit: u32,
    pub sort: SortOrder,
}

impl ValueObject for QueryParams {}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_SIZE,
            sort: SortOrder::default(),
        }
    }
}

impl QueryParams {
    /// Same params with the limit raised by `step`.
    pub fn next_page(self, step: u32) -> Self {
        Self {
            limit: self.limit.saturating_add(step),
            ..self
        }
    }
}

/// One fetch result: the first `limit` products plus the source's total count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: u64,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("failed to parse product catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("product source unavailable: {0}")]
    Unavailable(String),
}

/// Data-fetching collaborator consulted by the listing.
pub trait ProductSource {
    fn fetch(&self, params: &QueryParams) -> Result<ProductPage, CatalogError>;
}

/// In-memory catalog for tests/dev and for file-backed listings.
///
/// Products are kept sorted by id; `fetch` slices them the way the remote
/// product API does (`?limit=N&sort=asc|desc`).
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new(mut products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id) {
                return Err(DomainError::validation(format!("duplicate product id {}", product.id)).into());
            }
        }

        products.sort_by_key(|p| p.id);
        Ok(Self { products })
    }

    /// Parse a JSON array of product records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductSource for InMemoryCatalog {
    fn fetch(&self, params: &QueryParams) -> Result<ProductPage, CatalogError> {
        if params.limit == 0 {
            return Err(DomainError::validation("limit must be positive").into());
        }

        let limit = params.limit as usize;
        let products = match params.sort {
            SortOrder::Asc => self.products.iter().take(limit).cloned().collect(),
            SortOrder::Desc => self.products.iter().rev().take(limit).cloned().collect(),
        };

        Ok(ProductPage {
            products,
            total: self.products.len() as u64,
        })
    }
}
