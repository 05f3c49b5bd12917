//! Session flag persistence on top of a [`LocalStore`].

use std::sync::Arc;

use crate::error::Result;
use crate::session::model::{LOGGED_IN_KEY, LOGGED_IN_VALUE, SessionState};
use crate::session::store::LocalStore;

/// Reads and writes the persisted logged-in flag.
///
/// The page pipeline reads the state once per load and then passes the
/// resulting [`SessionState`] around explicitly.
#[derive(Clone)]
pub struct SessionService {
    store: Arc<dyn LocalStore>,
    key: String,
}

impl SessionService {
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self::with_key(store, LOGGED_IN_KEY)
    }

    /// Uses a custom store key instead of [`LOGGED_IN_KEY`].
    pub fn with_key(store: Arc<dyn LocalStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Loads the current state. An unreadable store counts as logged out.
    pub async fn load(&self) -> SessionState {
        match self.store.get_item(&self.key).await {
            Ok(value) => SessionState::from_stored(value.as_deref()),
            Err(e) => {
                tracing::warn!(key = %self.key, "Failed to read session flag: {}", e);
                SessionState::LoggedOut
            }
        }
    }

    /// Persists the logged-in flag.
    pub async fn log_in(&self) -> Result<SessionState> {
        self.store.set_item(&self.key, LOGGED_IN_VALUE).await?;
        Ok(SessionState::LoggedIn)
    }

    /// Removes the logged-in flag.
    pub async fn log_out(&self) -> Result<SessionState> {
        self.store.remove_item(&self.key).await?;
        Ok(SessionState::LoggedOut)
    }
}
