mod dir;
mod http;

use std::path::Path;
use std::sync::Arc;

use storefront_core::error::Result;
use storefront_core::fetch::ResourceFetcher;

pub use dir::DirFetcher;
pub use http::HttpFetcher;

/// Picks a transport for an origin: `http(s)://` URLs go over HTTP, anything
/// else is a site directory.
pub fn fetcher_for_origin(origin: &str) -> Result<Arc<dyn ResourceFetcher>> {
    if origin.starts_with("http://") || origin.starts_with("https://") {
        Ok(Arc::new(HttpFetcher::new(origin)?))
    } else {
        Ok(Arc::new(DirFetcher::new(Path::new(origin))))
    }
}
