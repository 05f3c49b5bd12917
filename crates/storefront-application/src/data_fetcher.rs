//! Failure-absorbing resource retrieval.
//!
//! The page pipeline never propagates fetch errors: every failure is logged
//! here and the caller receives `None`, which means "skip this region".

use std::sync::Arc;

use storefront_core::fetch::ResourceFetcher;
use storefront_core::product::{Catalog, Product};

#[derive(Clone)]
pub struct DataFetcher {
    transport: Arc<dyn ResourceFetcher>,
}

impl DataFetcher {
    pub fn new(transport: Arc<dyn ResourceFetcher>) -> Self {
        Self { transport }
    }

    /// Raw text of a resource, or `None` after logging the failure.
    pub async fn fetch_text(&self, path: &str) -> Option<String> {
        match self.transport.fetch(path).await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::error!(path, status = ?e.status(), "Failed to fetch resource: {}", e);
                None
            }
        }
    }

    /// The product catalog at `path`, validated entry by entry.
    ///
    /// Invalid entries are skipped (and logged by [`Catalog::parse`]); a
    /// document that is not a product array yields `None`.
    pub async fn fetch_json(&self, path: &str) -> Option<Vec<Product>> {
        let body = self.fetch_text(path).await?;
        match Catalog::parse(&body) {
            Ok(catalog) => {
                tracing::debug!(
                    path,
                    products = catalog.products.len(),
                    skipped = catalog.skipped.len(),
                    "Loaded catalog"
                );
                Some(catalog.products)
            }
            Err(e) => {
                tracing::error!(path, "Failed to parse catalog: {}", e);
                None
            }
        }
    }
}
