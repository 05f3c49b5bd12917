//! View binding module.
//!
//! - `binding`: the [`ViewBinding`] and [`Navigator`] seams plus event types
//! - `memory`: an in-memory page for tests and the command-line host
//! - `slots`: element ids shared by host pages and templates

mod binding;
mod memory;
pub mod slots;

pub use binding::{
    EventKind, Navigation, Navigator, Notice, NoticeLevel, RecordingNavigator, UiEvent,
    ViewBinding,
};
pub use memory::MemoryView;
