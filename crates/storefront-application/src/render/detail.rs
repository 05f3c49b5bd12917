//! Product detail page rendering and its interactive controls.

use std::sync::Arc;

use minijinja::context;
use serde::Serialize;
use storefront_core::config::StorefrontConfig;
use storefront_core::error::Result;
use storefront_core::product::{Product, Review, find_product};
use storefront_core::view::slots::{
    CART_COUNT, PRODUCT_DETAILS, QUANTITY_DECREASE, QUANTITY_DISPLAY, QUANTITY_INCREASE,
    RECOMMENDATIONS_GRID, RESERVE_BUTTON, REVIEWS_GRID,
};
use storefront_core::view::{EventKind, Notice, ViewBinding};

use crate::commands::{DetailCommand, DetailState};
use crate::format::{format_number, format_price, star_bar};
use crate::render::grid::ProductRenderer;
use crate::templates::{NOT_FOUND, PRODUCT_DETAIL, REVIEW_LIST, Templates};

#[derive(Serialize)]
struct ControlIds {
    decrease: &'static str,
    quantity: &'static str,
    increase: &'static str,
    reserve: &'static str,
    reviews: &'static str,
    recommendations: &'static str,
}

const CONTROL_IDS: ControlIds = ControlIds {
    decrease: QUANTITY_DECREASE,
    quantity: QUANTITY_DISPLAY,
    increase: QUANTITY_INCREASE,
    reserve: RESERVE_BUTTON,
    reviews: REVIEWS_GRID,
    recommendations: RECOMMENDATIONS_GRID,
};

#[derive(Serialize)]
struct DetailView<'a> {
    image_url: &'a str,
    name: &'a str,
    rating: f64,
    stars: String,
    price: String,
    original_price: Option<String>,
    discount: Option<String>,
    description: &'a str,
    features: &'a [String],
    quantity: u32,
    ids: &'a ControlIds,
}

#[derive(Serialize)]
struct ReviewView<'a> {
    stars: String,
    comment: &'a str,
    customer: &'a str,
}

impl<'a> From<&'a Review> for ReviewView<'a> {
    fn from(review: &'a Review) -> Self {
        Self {
            stars: star_bar(review.rating),
            comment: &review.comment,
            customer: &review.customer,
        }
    }
}

/// Result of rendering the detail page.
#[derive(Debug)]
pub enum DetailOutcome {
    /// The details container is absent or rendering failed; nothing changed.
    Skipped,
    /// No product matched; the not-found message is shown and nothing is wired.
    NotFound,
    Rendered(DetailController),
}

#[derive(Clone)]
pub struct DetailRenderer {
    templates: Arc<Templates>,
    grid: ProductRenderer,
    currency_glyph: String,
}

impl DetailRenderer {
    pub fn new(templates: Arc<Templates>, grid: ProductRenderer, config: &StorefrontConfig) -> Self {
        Self {
            templates,
            grid,
            currency_glyph: config.currency_glyph.clone(),
        }
    }

    /// Renders the product selected by `requested_id` into the details
    /// container, then its reviews and recommendations, and wires the
    /// quantity and reserve controls.
    pub fn render_detail(
        &self,
        view: &mut dyn ViewBinding,
        products: &[Product],
        requested_id: Option<&str>,
    ) -> DetailOutcome {
        if !view.contains(PRODUCT_DETAILS) {
            tracing::debug!("No details container on this page");
            return DetailOutcome::Skipped;
        }

        let Some(product) = requested_id.and_then(|id| find_product(products, id)) else {
            tracing::info!(requested_id, "Product not found");
            return match self.templates.render(NOT_FOUND, context! {}) {
                Ok(markup) => {
                    view.replace_html(PRODUCT_DETAILS, &markup);
                    DetailOutcome::NotFound
                }
                Err(e) => {
                    tracing::error!("Failed to render not-found message: {}", e);
                    DetailOutcome::Skipped
                }
            };
        };

        if let Err(e) = self.render_product(view, product, products) {
            tracing::error!(product_id = %product.id, "Failed to render product details: {}", e);
            return DetailOutcome::Skipped;
        }

        DetailOutcome::Rendered(DetailController::attach(view, product))
    }

    fn render_product(
        &self,
        view: &mut dyn ViewBinding,
        product: &Product,
        catalog: &[Product],
    ) -> Result<()> {
        let detail = DetailView {
            image_url: &product.image_url,
            name: &product.name,
            rating: product.rating,
            stars: star_bar(product.filled_stars()),
            price: format_price(product.price, &self.currency_glyph),
            original_price: product
                .original_price
                .map(|price| format_price(price, &self.currency_glyph)),
            discount: product
                .discount
                .filter(|discount| *discount > 0.0)
                .map(format_number),
            description: &product.description,
            features: &product.features,
            quantity: 1,
            ids: &CONTROL_IDS,
        };
        let markup = self.templates.render(PRODUCT_DETAIL, &detail)?;
        view.replace_html(PRODUCT_DETAILS, &markup);

        let reviews: Vec<ReviewView<'_>> = product.reviews.iter().map(ReviewView::from).collect();
        let markup = self.templates.render(REVIEW_LIST, context! { reviews => reviews })?;
        view.replace_html(REVIEWS_GRID, &markup);

        let recommended: Vec<Product> = product
            .recommendations(catalog)
            .into_iter()
            .cloned()
            .collect();
        self.grid.render_grid(view, &recommended, RECOMMENDATIONS_GRID);

        tracing::debug!(
            product_id = %product.id,
            reviews = product.reviews.len(),
            recommendations = recommended.len(),
            "Rendered product details"
        );
        Ok(())
    }
}

/// Drives the stepper and reserve controls of a rendered detail page.
#[derive(Debug, Clone)]
pub struct DetailController {
    product_name: String,
    state: DetailState,
}

impl DetailController {
    fn attach(view: &mut dyn ViewBinding, product: &Product) -> Self {
        for id in [QUANTITY_DECREASE, QUANTITY_INCREASE, RESERVE_BUTTON] {
            view.listen(id, EventKind::Click);
        }

        let cart_count = view
            .text(CART_COUNT)
            .and_then(|text| text.trim().parse::<u32>().ok())
            .unwrap_or(0);

        Self {
            product_name: product.name.clone(),
            state: DetailState::new(cart_count),
        }
    }

    /// The command bound to a control id, if any.
    pub fn command_for(target: &str) -> Option<DetailCommand> {
        match target {
            QUANTITY_DECREASE => Some(DetailCommand::Decrement),
            QUANTITY_INCREASE => Some(DetailCommand::Increment),
            RESERVE_BUTTON => Some(DetailCommand::Reserve),
            _ => None,
        }
    }

    pub fn state(&self) -> DetailState {
        self.state
    }

    pub fn handle(&mut self, command: DetailCommand, view: &mut dyn ViewBinding) {
        let effects = self.state.apply(command);

        if effects.quantity_changed {
            view.set_text(QUANTITY_DISPLAY, &self.state.quantity.to_string());
        }

        if let Some(quantity) = effects.reserved {
            view.set_text(CART_COUNT, &self.state.cart_count.to_string());
            view.notify(Notice::success(format!(
                "Reserved {} × {}.",
                quantity, self.product_name
            )));
            tracing::info!(quantity, cart_count = self.state.cart_count, "Reserved product");
        }
    }
}
