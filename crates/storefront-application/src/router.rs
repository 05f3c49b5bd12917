//! Page assembly and event dispatch.

use std::sync::Arc;

use serde::Serialize;
use storefront_core::config::StorefrontConfig;
use storefront_core::error::Result;
use storefront_core::fetch::ResourceFetcher;
use storefront_core::location::{ID_PARAM, PageKind, PageLocation};
use storefront_core::session::{LocalStore, SessionService, SessionState};
use storefront_core::view::slots::{LOGIN_FORM, LOGOUT_LINK, PRODUCT_GRID, REGISTER_FORM};
use storefront_core::view::{EventKind, Navigator, UiEvent, ViewBinding};

use crate::auth::AuthFlow;
use crate::commands::DetailState;
use crate::data_fetcher::DataFetcher;
use crate::fragments::{ChromeReport, FragmentLoader};
use crate::render::{DetailController, DetailOutcome, DetailRenderer, ProductRenderer};
use crate::templates::Templates;

/// What the page-specific step of a load did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "render", rename_all = "snake_case")]
pub enum PageRender {
    Grid { cards: usize },
    Detail { product_id: String },
    ProductNotFound,
    LoginForm { wired: bool },
    RegisterForm { wired: bool },
    /// The catalog could not be fetched, so nothing was rendered.
    CatalogUnavailable,
    /// The target container was missing.
    Skipped,
    Nothing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventOutcome {
    Handled,
    /// No listener for this element and event kind was attached.
    Ignored,
}

/// Serializable snapshot of a loaded page.
#[derive(Debug, Clone, Serialize)]
pub struct PageSummary {
    pub page_name: String,
    #[serde(flatten)]
    pub kind: PageKind,
    pub session: SessionState,
    pub chrome: ChromeReport,
    #[serde(flatten)]
    pub render: PageRender,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<DetailState>,
}

/// Assembles pages from a resource origin and a local store.
pub struct PageRouter {
    config: Arc<StorefrontConfig>,
    data: DataFetcher,
    fragments: FragmentLoader,
    grid: ProductRenderer,
    detail: DetailRenderer,
    session: SessionService,
    auth: AuthFlow,
}

impl PageRouter {
    pub fn new(
        config: StorefrontConfig,
        fetcher: Arc<dyn ResourceFetcher>,
        store: Arc<dyn LocalStore>,
    ) -> Result<Self> {
        let templates = Arc::new(Templates::new()?);
        let data = DataFetcher::new(fetcher);
        let session = SessionService::with_key(store, config.session_key.clone());
        let grid = ProductRenderer::new(templates.clone(), &config);
        let detail = DetailRenderer::new(templates, grid.clone(), &config);

        Ok(Self {
            fragments: FragmentLoader::new(data.clone(), config.fragments.clone()),
            auth: AuthFlow::new(session.clone(), config.pages.clone()),
            config: Arc::new(config),
            data,
            grid,
            detail,
            session,
        })
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Loads one page: header and footer, then exactly one page-specific step.
    ///
    /// Fragment loading and the catalog fetch run concurrently. Nothing here
    /// fails; unavailable regions are skipped and logged.
    pub async fn load(
        &self,
        location: &PageLocation,
        view: &mut dyn ViewBinding,
        navigator: &mut dyn Navigator,
    ) -> Page {
        let page_name = location.page_name();
        let kind = location.kind(&self.config.pages);
        let session = self.session.load().await;
        tracing::info!(page = %page_name, ?kind, ?session, "Loading page");

        let needs_catalog = matches!(kind, PageKind::Landing | PageKind::ProductDetail);
        let catalog = async {
            if needs_catalog {
                self.data.fetch_json(&self.config.catalog_path).await
            } else {
                None
            }
        };
        let (chrome, catalog) = tokio::join!(
            self.fragments.load_chrome(view, session, &page_name),
            catalog
        );

        let mut detail = None;
        let render = match &kind {
            PageKind::Landing => match catalog {
                Some(products) => PageRender::Grid {
                    cards: self.grid.render_grid(view, &products, PRODUCT_GRID),
                },
                None => PageRender::CatalogUnavailable,
            },
            PageKind::ProductDetail => match catalog {
                Some(products) => {
                    let requested = location.query(ID_PARAM);
                    match self
                        .detail
                        .render_detail(view, &products, requested.as_deref())
                    {
                        DetailOutcome::Rendered(controller) => {
                            detail = Some(controller);
                            PageRender::Detail {
                                product_id: requested.unwrap_or_default(),
                            }
                        }
                        DetailOutcome::NotFound => PageRender::ProductNotFound,
                        DetailOutcome::Skipped => PageRender::Skipped,
                    }
                }
                None => PageRender::CatalogUnavailable,
            },
            PageKind::Login => PageRender::LoginForm {
                wired: self.auth.wire_login(view, navigator, location),
            },
            PageKind::Register => PageRender::RegisterForm {
                wired: self.auth.wire_register(view),
            },
            PageKind::Unknown(page) => {
                tracing::debug!(page = %page, "No page-specific step");
                PageRender::Nothing
            }
        };

        Page {
            page_name,
            kind,
            session,
            chrome,
            render,
            detail,
            auth: self.auth.clone(),
        }
    }
}

/// A loaded page, ready to receive UI events.
pub struct Page {
    page_name: String,
    kind: PageKind,
    session: SessionState,
    chrome: ChromeReport,
    render: PageRender,
    detail: Option<DetailController>,
    auth: AuthFlow,
}

impl Page {
    pub fn kind(&self) -> &PageKind {
        &self.kind
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn render(&self) -> &PageRender {
        &self.render
    }

    pub fn detail_state(&self) -> Option<DetailState> {
        self.detail.as_ref().map(DetailController::state)
    }

    pub fn summary(&self) -> PageSummary {
        PageSummary {
            page_name: self.page_name.clone(),
            kind: self.kind.clone(),
            session: self.session,
            chrome: self.chrome,
            render: self.render.clone(),
            detail: self.detail_state(),
        }
    }

    /// Delivers a UI event to the handler attached during load.
    ///
    /// Events for elements without a matching listener are ignored.
    pub async fn dispatch(
        &mut self,
        event: &UiEvent,
        view: &mut dyn ViewBinding,
        navigator: &mut dyn Navigator,
    ) -> EventOutcome {
        if !view.is_listening(&event.target, event.kind) {
            tracing::debug!(%event, "No listener attached");
            return EventOutcome::Ignored;
        }

        match (event.kind, event.target.as_str()) {
            (EventKind::Submit, LOGIN_FORM) => {
                self.session = self.auth.submit_login(self.session, navigator).await;
            }
            (EventKind::Submit, REGISTER_FORM) => {
                self.auth.submit_register(navigator);
            }
            (EventKind::Click, LOGOUT_LINK) => {
                self.session = self.auth.logout(self.session, navigator).await;
            }
            (EventKind::Click, target) => {
                let (Some(controller), Some(command)) =
                    (self.detail.as_mut(), DetailController::command_for(target))
                else {
                    return EventOutcome::Ignored;
                };
                controller.handle(command, view);
            }
            _ => return EventOutcome::Ignored,
        }

        tracing::debug!(%event, "Handled event");
        EventOutcome::Handled
    }
}
