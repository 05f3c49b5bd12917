//! HTTP transport backed by reqwest.

use async_trait::async_trait;
use reqwest::Client;
use storefront_core::error::{Result, StorefrontError};
use storefront_core::fetch::ResourceFetcher;
use url::Url;

/// Fetches resources relative to a base URL.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
    base: Url,
}

impl HttpFetcher {
    /// Creates a fetcher for the given origin, e.g. `https://shop.example/`.
    ///
    /// A base without a trailing slash is treated as a directory.
    pub fn new(base: &str) -> Result<Self> {
        Self::with_client(Client::new(), base)
    }

    pub fn with_client(client: Client, base: &str) -> Result<Self> {
        let mut base = Url::parse(base)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }
}

#[async_trait]
impl ResourceFetcher for HttpFetcher {
    async fn fetch(&self, path: &str) -> Result<String> {
        let url = self.base.join(path.trim_start_matches('/'))?;
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| StorefrontError::fetch(path, format!("request failed: {err}")))?;

        if !response.status().is_success() {
            return Err(StorefrontError::fetch_status(path, response.status().as_u16()));
        }

        response
            .text()
            .await
            .map_err(|err| StorefrontError::fetch(path, format!("failed to read body: {err}")))
    }
}
