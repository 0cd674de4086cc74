//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**; two with the same fields are the same
/// value. They are never edited in place: an owner "changes" one by building
/// a new value and replacing the old one wholesale, so a reader holding the
/// previous value never sees a half-updated mix of fields.
///
/// Filter criteria and listing query params are value objects.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct PriceRange { min: Option<f64>, max: Option<f64> }
///
/// impl ValueObject for PriceRange {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
