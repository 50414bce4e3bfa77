// src/state/mod.rs
//
// Declarative state layer for the editor.
//
// This module contains the plain data the editor owns: parameter
// definitions, the working model, and display snapshots. Views never
// mutate these directly.
//
// Key principles:
// - Identifiers are normalized strings
// - Snapshots are deep copies, never views into live state
// - Mutations happen through Commands

mod command;
mod model;
mod param;
mod snapshot;

pub use command::*;
pub use model::*;
pub use param::*;
pub use snapshot::*;
