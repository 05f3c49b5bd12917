pub mod atomic_toml;
mod local_store;

pub use atomic_toml::AtomicTomlFile;
pub use local_store::TomlLocalStore;
