//! Page location parsing and page identity.

use std::path::Path;

use serde::Serialize;
use url::Url;

use crate::config::PagesConfig;
use crate::error::Result;

const LOCATION_BASE: &str = "http://storefront.local/";

/// Query parameter selecting the product on the detail page.
pub const ID_PARAM: &str = "id";

/// Query parameter marking a completed registration on the login page.
pub const REGISTERED_PARAM: &str = "registered";

/// The kind of page being loaded, derived from its file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageKind {
    Landing,
    ProductDetail,
    Login,
    Register,
    Unknown(String),
}

/// The location of the current page: path plus query string.
///
/// Relative locations such as `product-details.html?id=2` are resolved
/// against a fixed base, so only the path and query carry meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    url: Url,
}

impl PageLocation {
    pub fn parse(raw: &str) -> Result<Self> {
        let base = Url::parse(LOCATION_BASE)?;
        let url = base.join(raw.trim())?;
        Ok(Self { url })
    }

    /// Last path segment, defaulting to `index.html` for a bare directory.
    pub fn page_name(&self) -> String {
        self.url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .filter(|segment| !segment.is_empty())
            .unwrap_or("index.html")
            .to_string()
    }

    /// First value of a query parameter.
    pub fn query(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    /// Whether a query parameter is present with a truthy value
    /// (`true`, `1`, `yes` or an empty value).
    pub fn flag(&self, key: &str) -> bool {
        self.query(key).is_some_and(|value| is_truthy(&value))
    }

    /// Relative href of this page with one query parameter removed.
    pub fn without_param(&self, key: &str) -> String {
        let remaining: Vec<(String, String)> = self
            .url
            .query_pairs()
            .filter(|(k, _)| k != key)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let mut stripped = self.url.clone();
        stripped.set_query(None);
        if !remaining.is_empty() {
            stripped.query_pairs_mut().extend_pairs(remaining);
        }

        match stripped.query() {
            Some(query) => format!("{}?{}", self.page_name(), query),
            None => self.page_name(),
        }
    }

    /// Relative href of this page including its query string.
    pub fn href(&self) -> String {
        match self.url.query() {
            Some(query) if !query.is_empty() => format!("{}?{}", self.page_name(), query),
            _ => self.page_name(),
        }
    }

    /// Classifies the page against the configured page names.
    pub fn kind(&self, pages: &PagesConfig) -> PageKind {
        let page = self.page_name();
        if page == pages.landing {
            PageKind::Landing
        } else if page.contains(stem(&pages.detail)) {
            PageKind::ProductDetail
        } else if page.contains(stem(&pages.login)) {
            PageKind::Login
        } else if page.contains(stem(&pages.register)) {
            PageKind::Register
        } else {
            PageKind::Unknown(page)
        }
    }
}

fn stem(page: &str) -> &str {
    Path::new(page)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(page)
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "" | "true" | "1" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_name_defaults_to_index() {
        assert_eq!(PageLocation::parse("").unwrap().page_name(), "index.html");
        assert_eq!(PageLocation::parse("/shop/").unwrap().page_name(), "index.html");
        assert_eq!(
            PageLocation::parse("/shop/login.html").unwrap().page_name(),
            "login.html"
        );
    }

    #[test]
    fn test_query_lookup() {
        let location = PageLocation::parse("product-details.html?id=2&ref=home").unwrap();
        assert_eq!(location.query("id").as_deref(), Some("2"));
        assert_eq!(location.query("missing"), None);
    }

    #[test]
    fn test_kind_classification() {
        let pages = PagesConfig::default();
        let kind = |raw: &str| PageLocation::parse(raw).unwrap().kind(&pages);

        assert_eq!(kind("index.html"), PageKind::Landing);
        assert_eq!(kind("/"), PageKind::Landing);
        assert_eq!(kind("product-details.html?id=1"), PageKind::ProductDetail);
        assert_eq!(kind("login.html?registered=true"), PageKind::Login);
        assert_eq!(kind("register.html"), PageKind::Register);
        assert_eq!(
            kind("about.html"),
            PageKind::Unknown("about.html".to_string())
        );
    }

    #[test]
    fn test_flag_values() {
        let flag = |raw: &str| PageLocation::parse(raw).unwrap().flag(REGISTERED_PARAM);
        assert!(flag("login.html?registered=true"));
        assert!(flag("login.html?registered=1"));
        assert!(flag("login.html?registered"));
        assert!(!flag("login.html?registered=false"));
        assert!(!flag("login.html"));
    }

    #[test]
    fn test_without_param() {
        let location = PageLocation::parse("login.html?registered=true").unwrap();
        assert_eq!(location.without_param(REGISTERED_PARAM), "login.html");

        let location = PageLocation::parse("login.html?registered=true&next=cart").unwrap();
        assert_eq!(location.without_param(REGISTERED_PARAM), "login.html?next=cart");
    }

    #[test]
    fn test_href_keeps_query() {
        let location = PageLocation::parse("product-details.html?id=3").unwrap();
        assert_eq!(location.href(), "product-details.html?id=3");
        assert_eq!(PageLocation::parse("index.html").unwrap().href(), "index.html");
    }
}
