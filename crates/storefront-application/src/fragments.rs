//! Shared header and footer fragments.

use serde::Serialize;
use storefront_core::config::FragmentsConfig;
use storefront_core::session::SessionState;
use storefront_core::view::slots::{FOOTER, HEADER, LOGOUT_LINK};
use storefront_core::view::{EventKind, ViewBinding};

use crate::data_fetcher::DataFetcher;

/// Which fragments made it into the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChromeReport {
    pub header: bool,
    pub footer: bool,
    pub logout_wired: bool,
}

#[derive(Clone)]
pub struct FragmentLoader {
    data: DataFetcher,
    paths: FragmentsConfig,
}

impl FragmentLoader {
    pub fn new(data: DataFetcher, paths: FragmentsConfig) -> Self {
        Self { data, paths }
    }

    /// Replaces the placeholder's contents with the fetched fragment.
    ///
    /// Returns `false` when the fetch failed or the placeholder is absent;
    /// neither is an error.
    pub async fn load_fragment(
        &self,
        view: &mut dyn ViewBinding,
        placeholder_id: &str,
        path: &str,
    ) -> bool {
        let Some(markup) = self.data.fetch_text(path).await else {
            return false;
        };
        let inserted = view.replace_html(placeholder_id, &markup);
        if !inserted {
            tracing::debug!(placeholder_id, path, "Placeholder missing, fragment dropped");
        }
        inserted
    }

    /// Loads the header variant for `session`, wires it, then loads the footer.
    pub async fn load_chrome(
        &self,
        view: &mut dyn ViewBinding,
        session: SessionState,
        page_name: &str,
    ) -> ChromeReport {
        let header_path = if session.is_logged_in() {
            &self.paths.header_logged_in
        } else {
            &self.paths.header_logged_out
        };
        let header = self.load_fragment(view, HEADER, header_path).await;
        let logout_wired = wire_header(view, session, page_name);
        let footer = self.load_fragment(view, FOOTER, &self.paths.footer).await;

        ChromeReport {
            header,
            footer,
            logout_wired,
        }
    }
}

/// Marks the current page's nav link active and, when logged in, listens for
/// logout. Returns whether logout was wired.
fn wire_header(view: &mut dyn ViewBinding, session: SessionState, page_name: &str) -> bool {
    view.highlight_link(HEADER, page_name);
    session.is_logged_in() && view.listen(LOGOUT_LINK, EventKind::Click)
}
