//! Configuration file loading.

use std::fs;
use std::path::{Path, PathBuf};

use storefront_core::config::StorefrontConfig;
use storefront_core::error::{Result, StorefrontError};

use crate::paths::StorefrontPaths;

/// Loads [`StorefrontConfig`] from a TOML file.
///
/// A missing or blank file yields the defaults; a file that exists but does
/// not parse is an error.
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Config at the default location (`<config_dir>/storefront/config.toml`).
    pub fn new() -> Result<Self> {
        let path = StorefrontPaths::new(None)
            .config_file()
            .map_err(|e| StorefrontError::config(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<StorefrontConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No config file, using defaults");
            return Ok(StorefrontConfig::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            StorefrontError::config(format!(
                "Failed to read config file at {:?}: {}",
                self.path, e
            ))
        })?;

        if content.trim().is_empty() {
            return Ok(StorefrontConfig::default());
        }

        toml::from_str(&content).map_err(|e| {
            StorefrontError::config(format!(
                "Failed to parse config file at {:?}: {}",
                self.path, e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));
        assert_eq!(service.load().unwrap(), StorefrontConfig::default());
    }

    #[test]
    fn test_loads_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
catalog_path = "api/catalog.json"

[fragments]
footer = "partials/footer.html"
"#,
        )
        .unwrap();

        let config = ConfigService::with_path(path).load().unwrap();
        assert_eq!(config.catalog_path, "api/catalog.json");
        assert_eq!(config.fragments.footer, "partials/footer.html");
        assert_eq!(
            config.fragments.header_logged_in,
            "components/header-logged-in.html"
        );
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "catalog_path = 42").unwrap();
        let err = ConfigService::with_path(path).load().unwrap_err();
        assert!(matches!(err, StorefrontError::Config(_)));
    }
}
