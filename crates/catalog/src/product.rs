//! Product model, mirroring the upstream store API's JSON shape.

use serde::{Deserialize, Serialize};

/// Product identifier as assigned by the upstream API.
///
/// Stable across requests; this is the de-duplication key for the wishlist.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Aggregated customer rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

/// A catalog product.
///
/// Field names match the upstream JSON exactly; this type is read-only from
/// the catalog's point of view (the API is the source of truth) and is stored
/// verbatim in wishlist snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: Rating,
}
