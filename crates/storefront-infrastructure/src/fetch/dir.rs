//! Transport serving resources from a site directory.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use storefront_core::error::{Result, StorefrontError};
use storefront_core::fetch::ResourceFetcher;

/// Reads resources from files under a root directory.
///
/// Missing files answer 404 and paths leaving the root answer 403, the way a
/// static file server would.
#[derive(Debug, Clone)]
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        let mut resolved = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }
        Some(resolved)
    }
}

#[async_trait]
impl ResourceFetcher for DirFetcher {
    async fn fetch(&self, path: &str) -> Result<String> {
        let Some(file) = self.resolve(path) else {
            return Err(StorefrontError::fetch_status(path, 403));
        };

        match tokio::fs::read_to_string(&file).await {
            Ok(body) => Ok(body),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorefrontError::fetch_status(path, 404))
            }
            Err(e) => Err(StorefrontError::fetch(path, e.to_string())),
        }
    }
}
