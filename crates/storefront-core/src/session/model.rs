//! Session domain model.

use serde::{Deserialize, Serialize};

/// Key under which the logged-in flag is stored.
pub const LOGGED_IN_KEY: &str = "loggedIn";

/// Stored value meaning "logged in"; any other value (or none) means logged out.
pub const LOGGED_IN_VALUE: &str = "true";

/// Display-only login state.
///
/// There is no credential behind this: it only selects the header variant and
/// whether logout is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn,
}

impl SessionState {
    /// Interprets a raw stored value.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(LOGGED_IN_VALUE) => SessionState::LoggedIn,
            _ => SessionState::LoggedOut,
        }
    }

    pub fn is_logged_in(self) -> bool {
        matches!(self, SessionState::LoggedIn)
    }
}
