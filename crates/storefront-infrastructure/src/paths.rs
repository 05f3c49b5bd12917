//! Path resolution for storefront configuration and local state.
//!
//! ```text
//! <config_dir>/storefront/
//! ├── config.toml          # StorefrontConfig
//! └── local_store.toml     # persisted key-value entries (session flag)
//! ```

use std::path::PathBuf;

const APP_DIR: &str = "storefront";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// No platform config directory could be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Resolves storefront paths, optionally under an explicit base directory.
#[derive(Debug, Clone, Default)]
pub struct StorefrontPaths {
    base: Option<PathBuf>,
}

impl StorefrontPaths {
    /// With `None`, paths live under the platform config directory.
    pub fn new(base: Option<PathBuf>) -> Self {
        Self { base }
    }

    /// The storefront configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::ConfigDirNotFound),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    pub fn local_store_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("local_store.toml"))
    }
}
