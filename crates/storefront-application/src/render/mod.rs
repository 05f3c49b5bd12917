//! Markup renderers for product data.
//!
//! - `grid`: product cards for the landing page and recommendations
//! - `detail`: the product detail page and its controls

pub mod detail;
pub mod grid;

pub use detail::{DetailController, DetailOutcome, DetailRenderer};
pub use grid::ProductRenderer;
