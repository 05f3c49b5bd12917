//! Session domain module.
//!
//! - `model`: the logged-in / logged-out state
//! - `store`: local key-value store trait and in-memory implementation
//! - `service`: flag persistence on top of a store

mod model;
mod service;
mod store;

pub use model::{LOGGED_IN_KEY, LOGGED_IN_VALUE, SessionState};
pub use service::SessionService;
pub use store::{LocalStore, MemoryLocalStore};
