//! Product card grid.

use std::sync::Arc;

use minijinja::context;
use serde::Serialize;
use storefront_core::config::StorefrontConfig;
use storefront_core::location::ID_PARAM;
use storefront_core::product::Product;
use storefront_core::view::ViewBinding;
use url::form_urlencoded;

use crate::format::format_price;
use crate::templates::{PRODUCT_GRID, Templates};

#[derive(Serialize)]
struct CardView<'a> {
    href: String,
    image_url: &'a str,
    name: &'a str,
    price: String,
}

/// Expands one card per product into a container.
#[derive(Clone)]
pub struct ProductRenderer {
    templates: Arc<Templates>,
    currency_glyph: String,
    detail_page: String,
}

impl ProductRenderer {
    pub fn new(templates: Arc<Templates>, config: &StorefrontConfig) -> Self {
        Self {
            templates,
            currency_glyph: config.currency_glyph.clone(),
            detail_page: config.pages.detail.clone(),
        }
    }

    /// Replaces the container's contents with product cards, in input order.
    ///
    /// Returns the number of cards rendered. An empty list or a missing
    /// container leaves the page untouched.
    pub fn render_grid(
        &self,
        view: &mut dyn ViewBinding,
        products: &[Product],
        container_id: &str,
    ) -> usize {
        if products.is_empty() || !view.contains(container_id) {
            return 0;
        }

        let cards: Vec<CardView<'_>> = products.iter().map(|p| self.card(p)).collect();
        match self.templates.render(PRODUCT_GRID, context! { cards => cards }) {
            Ok(markup) => {
                view.replace_html(container_id, &markup);
                products.len()
            }
            Err(e) => {
                tracing::error!(container_id, "Failed to render product grid: {}", e);
                0
            }
        }
    }

    fn card<'a>(&self, product: &'a Product) -> CardView<'a> {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair(ID_PARAM, &product.id.to_string())
            .finish();
        CardView {
            href: format!("{}?{}", self.detail_page, query),
            image_url: &product.image_url,
            name: &product.name,
            price: format_price(product.price, &self.currency_glyph),
        }
    }
}
