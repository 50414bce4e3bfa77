// src/lib.rs
//
// Library entry point for Rust and WebAssembly consumers.

mod config;
mod editor;
mod error;
mod form;
mod state;
mod ui;
mod view;

#[cfg(feature = "web")]
mod web;

#[cfg(feature = "web")]
pub mod wasm;

// Re-export key types for Rust consumers
pub use config::EditorConfig;
pub use editor::ParamEditor;
pub use error::{EditorError, EditorResult, Field};
pub use form::{CreateDraft, ValueInput};
pub use state::{
    Command, CommandResult, Model, ParamId, ParamValue, Parameter, Snapshot, SnapshotRow,
};
pub use ui::{EditorUi, Redraw, UiEvent};
pub use view::{
    FORM_TITLE, LIST_TITLE, ParamListView, ParamRow, TABLE_CAPTION, TABLE_HEADERS, TableView,
};
