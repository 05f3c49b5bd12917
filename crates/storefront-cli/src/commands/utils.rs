use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use storefront_core::config::StorefrontConfig;
use storefront_core::session::LocalStore;
use storefront_infrastructure::{ConfigService, TomlLocalStore};

/// Opens the given store file, or the default one under the config dir.
pub fn open_store(path: Option<PathBuf>) -> Result<Arc<dyn LocalStore>> {
    let store = match path {
        Some(path) => TomlLocalStore::with_path(path),
        None => TomlLocalStore::new().context("Failed to locate the local store")?,
    };
    Ok(Arc::new(store))
}

pub fn load_config(path: Option<PathBuf>) -> Result<StorefrontConfig> {
    let service = match path {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new().context("Failed to locate the config file")?,
    };
    service
        .load()
        .with_context(|| format!("Failed to load config from {}", service.path().display()))
}
