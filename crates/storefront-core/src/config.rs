use serde::{Deserialize, Serialize};

use crate::session::LOGGED_IN_KEY;

/// Resource paths for the shared header/footer fragments.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FragmentsConfig {
    pub header_logged_in: String,
    pub header_logged_out: String,
    pub footer: String,
}

impl Default for FragmentsConfig {
    fn default() -> Self {
        Self {
            header_logged_in: "components/header-logged-in.html".to_string(),
            header_logged_out: "components/header-logged-out.html".to_string(),
            footer: "components/footer.html".to_string(),
        }
    }
}

/// Page file names the router recognizes.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PagesConfig {
    pub landing: String,
    pub detail: String,
    pub login: String,
    pub register: String,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            landing: "index.html".to_string(),
            detail: "product-details.html".to_string(),
            login: "login.html".to_string(),
            register: "register.html".to_string(),
        }
    }
}

/// Storefront configuration, usually read from `config.toml`.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Path of the catalog document relative to the origin.
    pub catalog_path: String,
    /// Glyph prefixed to every formatted price.
    pub currency_glyph: String,
    /// Local store key holding the logged-in flag.
    pub session_key: String,
    pub fragments: FragmentsConfig,
    pub pages: PagesConfig,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_path: "data/products.json".to_string(),
            currency_glyph: "₱".to_string(),
            session_key: LOGGED_IN_KEY.to_string(),
            fragments: FragmentsConfig::default(),
            pages: PagesConfig::default(),
        }
    }
}

impl StorefrontConfig {
    /// Header fragment path for the given login state.
    pub fn header_fragment(&self, logged_in: bool) -> &str {
        if logged_in {
            &self.fragments.header_logged_in
        } else {
            &self.fragments.header_logged_out
        }
    }
}
