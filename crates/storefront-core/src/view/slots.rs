//! Element ids the host page and the rendered templates agree on.

pub const HEADER: &str = "header-placeholder";
pub const FOOTER: &str = "footer-placeholder";
pub const PRODUCT_GRID: &str = "product-grid-container";
pub const PRODUCT_DETAILS: &str = "product-details-container";
pub const REVIEWS_GRID: &str = "reviews-grid-container";
pub const RECOMMENDATIONS_GRID: &str = "recommendations-grid-container";
pub const QUANTITY_DISPLAY: &str = "quantity-display";
pub const QUANTITY_DECREASE: &str = "quantity-decrease";
pub const QUANTITY_INCREASE: &str = "quantity-increase";
pub const RESERVE_BUTTON: &str = "reserve-button";
pub const CART_COUNT: &str = "cart-count";
pub const LOGIN_FORM: &str = "login-form";
pub const REGISTER_FORM: &str = "register-form";
pub const LOGOUT_LINK: &str = "logout-link";
