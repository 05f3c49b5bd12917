//! Catalog document parsing and schema validation.

use serde_json::Value;

use crate::error::{Result, StorefrontError};
use crate::product::model::Product;

/// A catalog entry that was dropped while loading.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEntry {
    /// Position of the entry in the source array.
    pub index: usize,
    pub reason: String,
}

/// Result of loading a catalog document.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub skipped: Vec<SkippedEntry>,
}

impl Catalog {
    /// Parses a catalog document: a JSON array of product records.
    ///
    /// Entries that do not deserialize or fail [`Product::validate`] are
    /// skipped and reported in [`Catalog::skipped`]. A document that is not an
    /// array at all is an error.
    pub fn parse(document: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(document)?;
        let Value::Array(entries) = value else {
            return Err(StorefrontError::Serialization {
                format: "JSON".to_string(),
                message: "catalog document is not an array".to_string(),
            });
        };

        let mut catalog = Catalog::default();
        for (index, entry) in entries.into_iter().enumerate() {
            let checked = serde_json::from_value::<Product>(entry)
                .map_err(|e| e.to_string())
                .and_then(|product| product.validate().map(|_| product));

            match checked {
                Ok(product) => catalog.products.push(product),
                Err(reason) => {
                    tracing::warn!(index, %reason, "Skipping invalid catalog entry");
                    catalog.skipped.push(SkippedEntry { index, reason });
                }
            }
        }

        Ok(catalog)
    }
}
