//! Product catalog domain module.
//!
//! - `model`: product, review and identifier types
//! - `catalog`: catalog document parsing with per-entry validation

mod catalog;
mod model;

pub use catalog::{Catalog, SkippedEntry};
pub use model::{MAX_RATING, Product, ProductId, Review, find_product, rounded_stars};
