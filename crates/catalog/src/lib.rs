//! `vitrine-catalog` — product catalog domain primitives.
//!
//! This crate contains the **pure domain** side of the catalog: the product
//! model as delivered by the upstream store API, plus the client-side search
//! and category filtering applied to an already-fetched product list. It has
//! no knowledge of how products are fetched or rendered.

pub mod category;
pub mod filter;
pub mod product;

pub use category::{ALL_CATEGORIES, CategoryOption, category_options};
pub use filter::{CategoryFilter, filter_products};
pub use product::{Product, ProductId, Rating};
