//! Product builders for tests.

use std::borrow::Borrow;

use storefront_core::ProductId;

use crate::product::Product;

pub fn product(id: u64, title: &str, price: f64) -> Product {
    Product::new(ProductId::new(id).unwrap(), title, price).unwrap()
}

/// Products `1..=count` titled "Product N" and priced `N * 10`.
pub fn numbered(count: u64) -> Vec<Product> {
    (1..=count)
        .map(|n| product(n, &format!("Product {n}"), n as f64 * 10.0))
        .collect()
}

pub fn ids<P: Borrow<Product>>(products: &[P]) -> Vec<u64> {
    products.iter().map(|p| p.borrow().id.get()).collect()
}
