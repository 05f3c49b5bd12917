//! Product and review domain models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest rating a product or review can carry.
pub const MAX_RATING: u8 = 5;

/// Identifier of a product as it appears in the catalog.
///
/// Catalog authors use both numbers and strings, and the detail page receives
/// the identifier as a query string. A numeric id matches any raw value that
/// reads as the same number once surrounding whitespace is dropped, so
/// `ProductId::Number(2)` equals `"2"`, `"02"` and `" 2 "`. Text ids match
/// exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl ProductId {
    /// Returns true when this identifier matches a raw value such as a query
    /// parameter.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            ProductId::Number(n) => {
                let raw = raw.trim();
                !raw.is_empty() && raw.parse::<f64>().is_ok_and(|value| value == *n as f64)
            }
            ProductId::Text(s) => s == raw,
        }
    }
}

impl PartialEq for ProductId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ProductId::Number(a), ProductId::Number(b)) => a == b,
            (ProductId::Text(a), ProductId::Text(b)) => a == b,
            (ProductId::Number(_), ProductId::Text(s)) => self.matches(s),
            (ProductId::Text(s), ProductId::Number(_)) => other.matches(s),
        }
    }
}

impl Eq for ProductId {}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        ProductId::Number(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        ProductId::Text(value.to_string())
    }
}

/// A customer review embedded in a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Whole-star rating, 0 to 5.
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    /// Customer display name.
    #[serde(alias = "name", alias = "author")]
    pub customer: String,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(alias = "image")]
    pub image_url: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// Discount percentage shown as a badge next to the original price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default, rename = "recommendation_ids", alias = "recommendationIds")]
    pub recommendation_ids: Vec<ProductId>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Product {
    /// Checks the invariants a catalog entry must satisfy to be rendered.
    ///
    /// Returns a human readable reason for the first violation found.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is empty".to_string());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!("price {} is not a non-negative number", self.price));
        }
        if let Some(original) = self.original_price {
            if !original.is_finite() || original < 0.0 {
                return Err(format!("originalPrice {} is invalid", original));
            }
        }
        if let Some(discount) = self.discount {
            if !(0.0..=100.0).contains(&discount) {
                return Err(format!("discount {} is outside 0-100", discount));
            }
        }
        if !(0.0..=f64::from(MAX_RATING)).contains(&self.rating) {
            return Err(format!("rating {} is outside 0-{}", self.rating, MAX_RATING));
        }
        if let Some((index, review)) = self
            .reviews
            .iter()
            .enumerate()
            .find(|(_, review)| review.rating > MAX_RATING)
        {
            return Err(format!(
                "review {} rating {} is outside 0-{}",
                index, review.rating, MAX_RATING
            ));
        }
        Ok(())
    }

    /// Number of filled stars for this product's rating, rounded to the
    /// nearest whole star.
    pub fn filled_stars(&self) -> u8 {
        rounded_stars(self.rating)
    }

    /// Products from `catalog` recommended by this one, in catalog order.
    ///
    /// Identifiers that match no product are dropped, and the product itself is
    /// never recommended.
    pub fn recommendations<'a>(&self, catalog: &'a [Product]) -> Vec<&'a Product> {
        catalog
            .iter()
            .filter(|candidate| candidate.id != self.id)
            .filter(|candidate| self.recommendation_ids.contains(&candidate.id))
            .collect()
    }
}

/// Rounds a fractional rating to whole stars within `0..=MAX_RATING`.
pub fn rounded_stars(rating: f64) -> u8 {
    if !rating.is_finite() {
        return 0;
    }
    rating.round().clamp(0.0, f64::from(MAX_RATING)) as u8
}

/// Looks up a product by a raw identifier (typically the `id` query value).
pub fn find_product<'a>(catalog: &'a [Product], raw_id: &str) -> Option<&'a Product> {
    catalog.iter().find(|product| product.id.matches(raw_id))
}
