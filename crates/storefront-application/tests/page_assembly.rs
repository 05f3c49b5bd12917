mod common;

use std::sync::Arc;

use common::*;
use storefront_application::{EventOutcome, PageRender};
use storefront_core::fetch::StaticFetcher;
use storefront_core::location::{PageKind, PageLocation};
use storefront_core::session::MemoryLocalStore;
use storefront_core::view::slots::{
    CART_COUNT, FOOTER as FOOTER_SLOT, HEADER, PRODUCT_DETAILS, PRODUCT_GRID, QUANTITY_DECREASE,
    QUANTITY_DISPLAY, QUANTITY_INCREASE, RECOMMENDATIONS_GRID, RESERVE_BUTTON, REVIEWS_GRID,
};
use storefront_core::view::{
    EventKind, MemoryView, NoticeLevel, RecordingNavigator, UiEvent, ViewBinding,
};

fn location(raw: &str) -> PageLocation {
    PageLocation::parse(raw).unwrap()
}

fn decoded(view: &MemoryView, id: &str) -> String {
    html_escape::decode_html_entities(&view.html(id).unwrap()).into_owned()
}

#[tokio::test]
async fn test_landing_renders_one_card_per_product_in_order() {
    let router = router(site(), Arc::new(MemoryLocalStore::new()));
    let mut view = host(LANDING_PAGE);
    let mut nav = RecordingNavigator::new();

    let page = router.load(&location("/index.html"), &mut view, &mut nav).await;

    assert_eq!(page.kind(), &PageKind::Landing);
    assert_eq!(page.render(), &PageRender::Grid { cards: 3 });

    let grid = decoded(&view, PRODUCT_GRID);
    assert_eq!(grid.matches("class=\"product-card\"").count(), 3);
    let chair = grid.find("Rattan Chair").unwrap();
    let table = grid.find("Narra Dining Table").unwrap();
    let lamp = grid.find("Capiz Lamp").unwrap();
    assert!(chair < table && table < lamp);

    assert!(grid.contains("₱4,500"));
    assert!(grid.contains("₱12,500"));
    assert!(grid.contains("₱1,234.5"));
    assert!(grid.contains(r#"href="product-details.html?id=2""#));
    assert!(!grid.contains("Loading"));
}

#[tokio::test]
async fn test_bare_directory_is_the_landing_page() {
    let router = router(site(), Arc::new(MemoryLocalStore::new()));
    let mut view = host(LANDING_PAGE);
    let mut nav = RecordingNavigator::new();

    let page = router.load(&location("/shop/"), &mut view, &mut nav).await;

    assert_eq!(page.kind(), &PageKind::Landing);
    assert!(decoded(&view, HEADER).contains("aria-current=\"page\""));
}

#[tokio::test]
async fn test_empty_catalog_leaves_grid_untouched() {
    let fetcher = fragments().with("data/products.json", "[]");
    let router = router(fetcher, Arc::new(MemoryLocalStore::new()));
    let mut view = host(LANDING_PAGE);
    let mut nav = RecordingNavigator::new();

    let page = router.load(&location("index.html"), &mut view, &mut nav).await;

    assert_eq!(page.render(), &PageRender::Grid { cards: 0 });
    assert_eq!(view.text(PRODUCT_GRID).as_deref(), Some("Loading…"));
}

#[tokio::test]
async fn test_catalog_failure_skips_region_but_keeps_chrome() {
    let router = router(fragments(), Arc::new(MemoryLocalStore::new()));
    let mut view = host(LANDING_PAGE);
    let mut nav = RecordingNavigator::new();

    let page = router.load(&location("index.html"), &mut view, &mut nav).await;

    assert_eq!(page.render(), &PageRender::CatalogUnavailable);
    assert!(view.text(HEADER).unwrap().contains("Login"));
    assert_eq!(view.text(FOOTER_SLOT).as_deref(), Some("Storefront"));
    assert_eq!(view.text(PRODUCT_GRID).as_deref(), Some("Loading…"));
}

#[tokio::test]
async fn test_missing_fragments_do_not_halt_the_page() {
    let fetcher = StaticFetcher::new().with("data/products.json", CATALOG);
    let router = router(fetcher, Arc::new(MemoryLocalStore::new()));
    let mut view = host(LANDING_PAGE);
    let mut nav = RecordingNavigator::new();

    let page = router.load(&location("index.html"), &mut view, &mut nav).await;

    let summary = page.summary();
    assert!(!summary.chrome.header);
    assert!(!summary.chrome.footer);
    assert_eq!(page.render(), &PageRender::Grid { cards: 3 });
}

#[tokio::test]
async fn test_detail_page_renders_product_reviews_and_recommendations() {
    let router = router(site(), Arc::new(MemoryLocalStore::new()));
    let mut view = host(DETAIL_PAGE);
    let mut nav = RecordingNavigator::new();

    let page = router
        .load(&location("product-details.html?id=2"), &mut view, &mut nav)
        .await;

    assert_eq!(page.kind(), &PageKind::ProductDetail);
    assert_eq!(
        page.render(),
        &PageRender::Detail {
            product_id: "2".to_string()
        }
    );

    let details = view.text(PRODUCT_DETAILS).unwrap();
    assert!(details.contains("Narra Dining Table"));
    assert!(details.contains("Solid narra hardwood, seats six."));
    assert!(details.contains("★★★★★"));
    assert!(details.contains("₱15,000"));
    assert!(details.contains("-17%"));

    let reviews = view.html(REVIEWS_GRID).unwrap();
    assert_eq!(reviews.matches("class=\"review-card\"").count(), 3);

    let recommendations = decoded(&view, RECOMMENDATIONS_GRID);
    assert_eq!(recommendations.matches("class=\"product-card\"").count(), 1);
    assert!(recommendations.contains("Rattan Chair"));
    assert!(recommendations.contains(r#"href="product-details.html?id=1""#));
    assert!(!recommendations.contains("Narra Dining Table"));

    assert_eq!(view.text(QUANTITY_DISPLAY).as_deref(), Some("1"));
    assert!(view.is_listening(RESERVE_BUTTON, EventKind::Click));
}

#[tokio::test]
async fn test_string_id_matches_numeric_product() {
    let router = router(site(), Arc::new(MemoryLocalStore::new()));
    let mut view = host(DETAIL_PAGE);
    let mut nav = RecordingNavigator::new();

    router
        .load(&location("product-details.html?id=3"), &mut view, &mut nav)
        .await;

    assert!(view.text(PRODUCT_DETAILS).unwrap().contains("Capiz Lamp"));
    assert_eq!(view.html(REVIEWS_GRID).unwrap().trim(), "");
    assert_eq!(view.html(RECOMMENDATIONS_GRID).unwrap().trim(), "");
}

#[tokio::test]
async fn test_unknown_product_shows_not_found_and_wires_nothing() {
    let router = router(site(), Arc::new(MemoryLocalStore::new()));
    let mut view = host(DETAIL_PAGE);
    let mut nav = RecordingNavigator::new();

    let mut page = router
        .load(&location("product-details.html?id=999"), &mut view, &mut nav)
        .await;

    assert_eq!(page.render(), &PageRender::ProductNotFound);
    assert_eq!(
        view.text(PRODUCT_DETAILS).as_deref(),
        Some("Product not found.")
    );
    assert!(view.listeners().is_empty());
    assert!(!view.contains(RESERVE_BUTTON));

    let outcome = page
        .dispatch(&UiEvent::click(RESERVE_BUTTON), &mut view, &mut nav)
        .await;
    assert_eq!(outcome, EventOutcome::Ignored);
    assert!(view.notices().is_empty());
}

#[tokio::test]
async fn test_quantity_stepper_never_drops_below_one() {
    let router = router(site(), Arc::new(MemoryLocalStore::new()));
    let mut view = host(DETAIL_PAGE);
    let mut nav = RecordingNavigator::new();
    let mut page = router
        .load(&location("product-details.html?id=1"), &mut view, &mut nav)
        .await;

    let decrease = UiEvent::click(QUANTITY_DECREASE);
    let increase = UiEvent::click(QUANTITY_INCREASE);

    page.dispatch(&decrease, &mut view, &mut nav).await;
    assert_eq!(view.text(QUANTITY_DISPLAY).as_deref(), Some("1"));

    page.dispatch(&increase, &mut view, &mut nav).await;
    page.dispatch(&increase, &mut view, &mut nav).await;
    assert_eq!(view.text(QUANTITY_DISPLAY).as_deref(), Some("3"));

    for _ in 0..4 {
        page.dispatch(&decrease, &mut view, &mut nav).await;
    }
    assert_eq!(view.text(QUANTITY_DISPLAY).as_deref(), Some("1"));
    assert_eq!(page.detail_state().unwrap().quantity, 1);
}

#[tokio::test]
async fn test_reserve_updates_cart_counter_and_notifies() {
    let store = MemoryLocalStore::with_items([("loggedIn", "true")]);
    let router = router(site(), Arc::new(store));
    let mut view = host(DETAIL_PAGE);
    let mut nav = RecordingNavigator::new();
    let mut page = router
        .load(&location("product-details.html?id=2"), &mut view, &mut nav)
        .await;

    assert_eq!(view.text(CART_COUNT).as_deref(), Some("0"));

    page.dispatch(&UiEvent::click(QUANTITY_INCREASE), &mut view, &mut nav)
        .await;
    let outcome = page
        .dispatch(&UiEvent::click(RESERVE_BUTTON), &mut view, &mut nav)
        .await;

    assert_eq!(outcome, EventOutcome::Handled);
    assert_eq!(view.text(CART_COUNT).as_deref(), Some("2"));
    assert_eq!(view.notices().len(), 1);
    assert_eq!(view.notices()[0].level, NoticeLevel::Success);
    assert!(view.notices()[0].message.contains("Narra Dining Table"));
    assert!(nav.history().is_empty());
}

#[tokio::test]
async fn test_unknown_page_only_loads_chrome() {
    let router = router(site(), Arc::new(MemoryLocalStore::new()));
    let mut view = host(r#"<header id="header-placeholder"></header><div id="product-grid-container"></div>"#);
    let mut nav = RecordingNavigator::new();

    let page = router.load(&location("about.html"), &mut view, &mut nav).await;

    assert_eq!(page.kind(), &PageKind::Unknown("about.html".to_string()));
    assert_eq!(page.render(), &PageRender::Nothing);
    assert!(view.text(HEADER).unwrap().contains("Shop"));
    assert_eq!(view.html(PRODUCT_GRID).as_deref(), Some(""));
}

#[tokio::test]
async fn test_events_without_listeners_are_ignored() {
    let router = router(site(), Arc::new(MemoryLocalStore::new()));
    let mut view = host(LANDING_PAGE);
    let mut nav = RecordingNavigator::new();
    let mut page = router.load(&location("index.html"), &mut view, &mut nav).await;

    for event in [
        UiEvent::click("logout-link"),
        UiEvent::submit("login-form"),
        UiEvent::click(PRODUCT_GRID),
    ] {
        assert_eq!(
            page.dispatch(&event, &mut view, &mut nav).await,
            EventOutcome::Ignored
        );
    }
    assert!(nav.history().is_empty());
}

#[tokio::test]
async fn test_header_fragment_wrapped_in_placeholder_id() {
    let fetcher = site().with(
        "components/header-logged-out.html",
        r#"<header id="header-placeholder"><a href="index.html">Shop</a></header>"#,
    );
    let router = router(fetcher, Arc::new(MemoryLocalStore::new()));
    let mut view = host(LANDING_PAGE);
    let mut nav = RecordingNavigator::new();

    let page = router.load(&location("index.html"), &mut view, &mut nav).await;

    assert!(page.summary().chrome.header);
    assert_eq!(page.render(), &PageRender::Grid { cards: 3 });
    assert_eq!(view.text(HEADER).as_deref(), Some("Shop"));
    let header = decoded(&view, HEADER);
    assert!(header.contains(r#"<header id="header-placeholder">"#));
    assert!(header.contains("aria-current=\"page\""));
    assert!(view.document().contains("Rattan Chair"));
}
