pub mod config_service;
pub mod fetch;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::fetch::{DirFetcher, HttpFetcher, fetcher_for_origin};
pub use crate::storage::TomlLocalStore;
