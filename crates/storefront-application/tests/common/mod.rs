#![allow(dead_code)]

use std::sync::Arc;

use storefront_application::PageRouter;
use storefront_core::config::StorefrontConfig;
use storefront_core::fetch::StaticFetcher;
use storefront_core::session::LocalStore;
use storefront_core::view::MemoryView;

pub const CATALOG: &str = r#"[
    {
        "id": 1,
        "name": "Rattan Chair",
        "imageUrl": "images/chair.jpg",
        "price": 4500,
        "description": "Handwoven rattan.",
        "rating": 4,
        "recommendation_ids": [2]
    },
    {
        "id": 2,
        "name": "Narra Dining Table",
        "imageUrl": "images/table.jpg",
        "price": 12500,
        "originalPrice": 15000,
        "discount": 17,
        "description": "Solid narra hardwood, seats six.",
        "features": ["Solid hardwood", "Seats six"],
        "rating": 4.6,
        "recommendation_ids": [1, 2],
        "reviews": [
            {"rating": 5, "comment": "Beautiful grain.", "customer": "Maria"},
            {"rating": 4, "comment": "Heavy but sturdy.", "customer": "Jose"},
            {"rating": 5, "comment": "Worth it.", "customer": "Ana"}
        ]
    },
    {
        "id": 3,
        "name": "Capiz Lamp",
        "imageUrl": "images/lamp.jpg",
        "price": 1234.5
    }
]"#;

pub const HEADER_LOGGED_OUT: &str = r#"<nav class="main-nav">
    <a href="index.html">Shop</a>
    <a href="login.html">Login</a>
    <a href="register.html">Register</a>
</nav>"#;

pub const HEADER_LOGGED_IN: &str = r##"<nav class="main-nav">
    <a href="index.html">Shop</a>
    <span>Cart (<span id="cart-count">0</span>)</span>
    <a id="logout-link" href="#">Logout</a>
</nav>"##;

pub const FOOTER: &str = r#"<footer><p>Storefront</p></footer>"#;

pub const LANDING_PAGE: &str = r#"<body>
    <header id="header-placeholder"></header>
    <main><div id="product-grid-container"><p>Loading…</p></div></main>
    <footer id="footer-placeholder"></footer>
</body>"#;

pub const DETAIL_PAGE: &str = r#"<body>
    <header id="header-placeholder"></header>
    <main id="product-details-container"></main>
    <footer id="footer-placeholder"></footer>
</body>"#;

pub const LOGIN_PAGE: &str = r#"<body>
    <header id="header-placeholder"></header>
    <form id="login-form"><input id="email"><button>Log in</button></form>
    <footer id="footer-placeholder"></footer>
</body>"#;

pub const REGISTER_PAGE: &str = r#"<body>
    <header id="header-placeholder"></header>
    <form id="register-form"><input id="email"><button>Register</button></form>
    <footer id="footer-placeholder"></footer>
</body>"#;

pub fn fragments() -> StaticFetcher {
    StaticFetcher::new()
        .with("components/header-logged-out.html", HEADER_LOGGED_OUT)
        .with("components/header-logged-in.html", HEADER_LOGGED_IN)
        .with("components/footer.html", FOOTER)
}

pub fn site() -> StaticFetcher {
    fragments().with("data/products.json", CATALOG)
}

pub fn router(fetcher: StaticFetcher, store: Arc<dyn LocalStore>) -> PageRouter {
    PageRouter::new(StorefrontConfig::default(), Arc::new(fetcher), store).unwrap()
}

pub fn host(markup: &str) -> MemoryView {
    MemoryView::from_html(markup)
}
