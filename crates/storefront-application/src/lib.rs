//! Storefront page assembly.
//!
//! [`PageRouter`] loads a page into a [`ViewBinding`](storefront_core::view::ViewBinding):
//! shared fragments first, then the landing grid, a product detail page, or
//! the login/registration wiring. The returned [`Page`] accepts UI events.

pub mod auth;
pub mod commands;
pub mod data_fetcher;
pub mod format;
pub mod fragments;
pub mod render;
pub mod router;
pub mod templates;

pub use auth::AuthFlow;
pub use commands::{DetailCommand, DetailState};
pub use data_fetcher::DataFetcher;
pub use fragments::{ChromeReport, FragmentLoader};
pub use router::{EventOutcome, Page, PageRender, PageRouter, PageSummary};
