//! Resource transport abstraction.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{Result, StorefrontError};

/// Retrieves a resource by path relative to the serving origin.
///
/// Implementations make a single attempt and report non-success statuses as
/// [`StorefrontError::Fetch`].
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<String>;
}

/// Serves resources from an in-memory map. Unknown paths answer 404.
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
    resources: HashMap<String, String>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a resource.
    pub fn with(mut self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.resources.insert(normalize(&path.into()), body.into());
        self
    }
}

#[async_trait]
impl ResourceFetcher for StaticFetcher {
    async fn fetch(&self, path: &str) -> Result<String> {
        self.resources
            .get(&normalize(path))
            .cloned()
            .ok_or_else(|| StorefrontError::fetch_status(path, 404))
    }
}

fn normalize(path: &str) -> String {
    path.trim_start_matches("./").trim_start_matches('/').to_string()
}
