//! Markup templates.
//!
//! Templates are compiled into the binary and auto-escaped as HTML.

use minijinja::Environment;
use serde::Serialize;
use storefront_core::error::Result;

pub const PRODUCT_GRID: &str = "product_grid.html";
pub const PRODUCT_DETAIL: &str = "product_detail.html";
pub const REVIEW_LIST: &str = "review_list.html";
pub const NOT_FOUND: &str = "not_found.html";

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template(PRODUCT_GRID, include_str!("../templates/product_grid.html"))?;
        env.add_template(PRODUCT_DETAIL, include_str!("../templates/product_detail.html"))?;
        env.add_template(REVIEW_LIST, include_str!("../templates/review_list.html"))?;
        env.add_template(NOT_FOUND, include_str!("../templates/not_found.html"))?;
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String> {
        Ok(self.env.get_template(name)?.render(ctx)?)
    }
}
