pub mod config;
pub mod error;
pub mod fetch;
pub mod location;
pub mod product;
pub mod session;
pub mod view;

// Re-export common error type
pub use error::{Result, StorefrontError};
