//! File-backed [`LocalStore`].

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use storefront_core::error::{Result, StorefrontError};
use storefront_core::session::LocalStore;

use crate::paths::StorefrontPaths;
use crate::storage::atomic_toml::AtomicTomlFile;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LocalStoreDocument {
    #[serde(default)]
    items: BTreeMap<String, String>,
}

/// Local key-value store persisted as a TOML document.
///
/// Every call goes to disk, so two processes sharing the file see each
/// other's writes on their next read.
#[derive(Clone)]
pub struct TomlLocalStore {
    file: Arc<AtomicTomlFile<LocalStoreDocument>>,
}

impl TomlLocalStore {
    /// Store at the default location (`<config_dir>/storefront/local_store.toml`).
    pub fn new() -> Result<Self> {
        let path = StorefrontPaths::new(None)
            .local_store_file()
            .map_err(|e| StorefrontError::config(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: Arc::new(AtomicTomlFile::new(path)),
        }
    }

    async fn read(&self) -> Result<LocalStoreDocument> {
        let file = self.file.clone();
        run_blocking(move || Ok(file.load()?.unwrap_or_default())).await
    }

    async fn modify<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>) + Send + 'static,
    {
        let file = self.file.clone();
        run_blocking(move || file.update(LocalStoreDocument::default(), |doc| f(&mut doc.items)))
            .await
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StorefrontError::internal(format!("Failed to join task: {}", e)))?
}

#[async_trait]
impl LocalStore for TomlLocalStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read().await?.items.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let key = key.to_string();
        let value = value.to_string();
        tracing::debug!(%key, "Writing local store entry");
        self.modify(move |items| {
            items.insert(key, value);
        })
        .await
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let key = key.to_string();
        tracing::debug!(%key, "Removing local store entry");
        self.modify(move |items| {
            items.remove(&key);
        })
        .await
    }

    async fn entries(&self) -> Result<BTreeMap<String, String>> {
        Ok(self.read().await?.items)
    }

    async fn clear(&self) -> Result<()> {
        self.modify(|items| items.clear()).await
    }
}
