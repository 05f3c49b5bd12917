//! View binding and navigation traits.
//!
//! Renderers never look elements up on their own: every read and write goes
//! through a [`ViewBinding`] addressed by element id, and every location
//! change goes through a [`Navigator`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::StorefrontError;

/// Kind of user interaction a listener is attached for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Click,
    Submit,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Click => write!(f, "click"),
            EventKind::Submit => write!(f, "submit"),
        }
    }
}

/// A user interaction aimed at one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UiEvent {
    pub kind: EventKind,
    pub target: String,
}

impl UiEvent {
    pub fn click(target: impl Into<String>) -> Self {
        Self {
            kind: EventKind::Click,
            target: target.into(),
        }
    }

    pub fn submit(target: impl Into<String>) -> Self {
        Self {
            kind: EventKind::Submit,
            target: target.into(),
        }
    }
}

impl FromStr for UiEvent {
    type Err = StorefrontError;

    /// Parses `click:<id>` or `submit:<id>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StorefrontError::config(format!("invalid event '{}'", s));
        let (kind, target) = s.split_once(':').ok_or_else(invalid)?;
        let target = target.trim();
        if target.is_empty() {
            return Err(invalid());
        }
        match kind.trim() {
            "click" => Ok(UiEvent::click(target)),
            "submit" => Ok(UiEvent::submit(target)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for UiEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.target)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Success,
}

/// A non-blocking toast shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }
}

/// Named element slots of the current page.
///
/// Every mutating method reports whether the target element existed; a
/// missing element is never an error.
pub trait ViewBinding: Send {
    /// Whether an element with this id is currently in the page.
    fn contains(&self, id: &str) -> bool;

    /// Replaces the element's contents with markup. Elements inside the
    /// markup become addressable; elements previously inside are dropped
    /// together with their listeners.
    fn replace_html(&mut self, id: &str, markup: &str) -> bool;

    /// Current markup of the element's contents.
    fn html(&self, id: &str) -> Option<String>;

    /// Text content of the element, tags stripped and entities decoded.
    fn text(&self, id: &str) -> Option<String>;

    /// Replaces the element's contents with plain text.
    fn set_text(&mut self, id: &str, text: &str) -> bool;

    /// Attaches a listener for `kind` events on the element.
    fn listen(&mut self, id: &str, kind: EventKind) -> bool;

    fn is_listening(&self, id: &str, kind: EventKind) -> bool;

    /// Marks links under `scope_id` whose `href` equals `href` as active.
    fn highlight_link(&mut self, scope_id: &str, href: &str) -> bool;

    /// Shows a toast.
    fn notify(&mut self, notice: Notice);
}

/// Location changes requested by the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "href", rename_all = "snake_case")]
pub enum Navigation {
    /// Load another page.
    Assign(String),
    /// Rewrite the current location without loading anything.
    Replace(String),
}

pub trait Navigator: Send {
    fn navigate(&mut self, href: &str);

    fn replace(&mut self, href: &str);
}

/// Navigator that only records what was requested.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    history: Vec<Navigation>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[Navigation] {
        &self.history
    }

    /// Target of the most recent page load request.
    pub fn last_assigned(&self) -> Option<&str> {
        self.history.iter().rev().find_map(|nav| match nav {
            Navigation::Assign(href) => Some(href.as_str()),
            Navigation::Replace(_) => None,
        })
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, href: &str) {
        self.history.push(Navigation::Assign(href.to_string()));
    }

    fn replace(&mut self, href: &str) {
        self.history.push(Navigation::Replace(href.to_string()));
    }
}
