use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use storefront_application::{EventOutcome, PageRouter, PageSummary};
use storefront_core::config::StorefrontConfig;
use storefront_core::fetch::ResourceFetcher;
use storefront_core::location::PageLocation;
use storefront_core::session::{LocalStore, SessionState};
use storefront_core::view::{
    MemoryView, Navigation, Notice, RecordingNavigator, UiEvent, ViewBinding,
};
use storefront_infrastructure::fetcher_for_origin;

#[derive(Serialize)]
struct EventReport<'a> {
    event: &'a UiEvent,
    outcome: EventOutcome,
}

#[derive(Serialize)]
struct RenderReport<'a> {
    page: PageSummary,
    events: Vec<EventReport<'a>>,
    session: SessionState,
    notices: &'a [Notice],
    navigations: &'a [Navigation],
    slots: BTreeMap<String, String>,
}

/// Loads `location` from `origin`, dispatches `events` in order and prints
/// the resulting page as JSON.
pub async fn run(
    config: StorefrontConfig,
    origin: &str,
    location: &str,
    events: &[UiEvent],
    store: Arc<dyn LocalStore>,
) -> Result<()> {
    let location = PageLocation::parse(location)
        .with_context(|| format!("Invalid page location: {}", location))?;
    let fetcher = fetcher_for_origin(origin)
        .with_context(|| format!("Invalid origin: {}", origin))?;

    let host_page = location.page_name();
    let markup = fetcher
        .fetch(&host_page)
        .await
        .with_context(|| format!("Failed to load host page {} from {}", host_page, origin))?;

    let router = PageRouter::new(config, fetcher, store)?;
    let mut view = MemoryView::from_html(&markup);
    let mut navigator = RecordingNavigator::new();

    let mut page = router.load(&location, &mut view, &mut navigator).await;

    let mut reports = Vec::with_capacity(events.len());
    for event in events {
        let outcome = page.dispatch(event, &mut view, &mut navigator).await;
        tracing::info!(%event, ?outcome, "Dispatched event");
        reports.push(EventReport { event, outcome });
    }

    let slots = view
        .slot_ids()
        .into_iter()
        .filter_map(|id| view.html(&id).map(|html| (id, html)))
        .collect();

    let report = RenderReport {
        page: page.summary(),
        events: reports,
        session: page.session(),
        notices: view.notices(),
        navigations: navigator.history(),
        slots,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
