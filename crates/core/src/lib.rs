//! `storefront-core` — shared building blocks for the storefront crates.
//!
//! This crate contains **pure** primitives (no IO, no rendering, no network).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use value_object::ValueObject;
