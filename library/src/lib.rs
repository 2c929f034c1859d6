//! Library panel logic for the drawing application.
//!
//! This crate is UI-framework agnostic. It owns the state behind the library
//! item picker: which reusable shape sets are visible, which of them are
//! selected (including shift-click range extension), how many previews are
//! revealed per render batch, and what gets inserted on the canvas or placed
//! in a drag payload. The host UI layer only forwards clicks and drags and
//! renders from the resulting state.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`selection`] | Range-aware selection tracker ([`selection::SelectionState`]) |
//! | [`panel`] | Panel state and the actions it emits ([`panel::LibraryPanel`]) |
//! | [`item`] | Library item model and element duplication |
//! | [`export`] | Library file codec and drag payload MIME type |
//! | [`batch`] | Batch sizing and progressive reveal of item previews |
//! | [`input`] | Modifier keys held during a click |
//! | [`config`] | Environment-driven panel configuration |
//! | [`error`] | Crate error type |
//! | [`consts`] | Shared constants (batch sizes, MIME type, format version) |

pub mod batch;
pub mod config;
pub mod consts;
pub mod error;
pub mod export;
pub mod input;
pub mod item;
pub mod panel;
pub mod selection;

pub use error::LibraryError;
pub use item::{LibraryItem, LibraryItemId, LibraryItemStatus};
pub use panel::LibraryPanel;
pub use selection::SelectionState;
