//! Simulated login, registration and logout.
//!
//! There are no credentials: submitting the login form always succeeds and
//! only flips the persisted flag that selects the header variant.

use storefront_core::config::PagesConfig;
use storefront_core::location::{PageLocation, REGISTERED_PARAM};
use storefront_core::session::{SessionService, SessionState};
use storefront_core::view::slots::{LOGIN_FORM, REGISTER_FORM};
use storefront_core::view::{EventKind, Navigator, Notice, ViewBinding};
use url::form_urlencoded;

pub const REGISTERED_NOTICE: &str = "Registration successful! Please log in.";

#[derive(Clone)]
pub struct AuthFlow {
    session: SessionService,
    pages: PagesConfig,
}

impl AuthFlow {
    pub fn new(session: SessionService, pages: PagesConfig) -> Self {
        Self { session, pages }
    }

    /// Wires the login form. When arriving from registration, shows the
    /// success notice and strips the marker from the location so a reload
    /// does not repeat it.
    pub fn wire_login(
        &self,
        view: &mut dyn ViewBinding,
        navigator: &mut dyn Navigator,
        location: &PageLocation,
    ) -> bool {
        let wired = view.listen(LOGIN_FORM, EventKind::Submit);

        if location.flag(REGISTERED_PARAM) {
            view.notify(Notice::success(REGISTERED_NOTICE));
            navigator.replace(&location.without_param(REGISTERED_PARAM));
        }

        wired
    }

    pub fn wire_register(&self, view: &mut dyn ViewBinding) -> bool {
        view.listen(REGISTER_FORM, EventKind::Submit)
    }

    /// Logs in and navigates to the landing page.
    ///
    /// A store failure is logged; navigation happens regardless.
    pub async fn submit_login(
        &self,
        current: SessionState,
        navigator: &mut dyn Navigator,
    ) -> SessionState {
        let state = match self.session.log_in().await {
            Ok(state) => {
                tracing::info!("Logged in");
                state
            }
            Err(e) => {
                tracing::warn!("Failed to persist login: {}", e);
                current
            }
        };
        navigator.navigate(&self.pages.landing);
        state
    }

    /// Registration leaves the session alone and sends the user to log in.
    pub fn submit_register(&self, navigator: &mut dyn Navigator) {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair(REGISTERED_PARAM, "true")
            .finish();
        tracing::info!("Registration submitted");
        navigator.navigate(&format!("{}?{}", self.pages.login, query));
    }

    /// Logs out and navigates to the landing page.
    pub async fn logout(
        &self,
        current: SessionState,
        navigator: &mut dyn Navigator,
    ) -> SessionState {
        let state = match self.session.log_out().await {
            Ok(state) => {
                tracing::info!("Logged out");
                state
            }
            Err(e) => {
                tracing::warn!("Failed to clear login: {}", e);
                current
            }
        };
        navigator.navigate(&self.pages.landing);
        state
    }
}
