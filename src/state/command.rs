// Commands from views to the editor.
//
// Commands are the ONLY way a view can mutate editor state.
// They are applied synchronously, in the order they are sent.

use super::ParamId;

/// A command from a view to the editor.
///
/// Commands are:
/// - Immutable once created
/// - Applied synchronously by [`ParamEditor::apply`](crate::ParamEditor::apply)
/// - Applied atomically (all-or-nothing)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // ═══════════════════════════════════════════
    // Parameters
    // ═══════════════════════════════════════════
    /// Create a parameter together with its initial value.
    AddParameter {
        id: ParamId,
        name: String,
        value: String,
    },

    /// Remove a parameter and its value.
    DeleteParameter { id: ParamId },

    // ═══════════════════════════════════════════
    // Model
    // ═══════════════════════════════════════════
    /// Replace the value of an existing parameter.
    UpdateValue { id: ParamId, value: String },

    // ═══════════════════════════════════════════
    // Display
    // ═══════════════════════════════════════════
    /// Capture a snapshot of parameters and model for the table.
    PublishSnapshot,
}

/// Response from the editor after applying a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Command succeeded.
    Ok,

    /// Snapshot captured with this many rows.
    SnapshotTaken { rows: usize },

    /// Command was rejected; state is unchanged.
    Error { message: String },
}

impl CommandResult {
    pub fn is_ok(&self) -> bool {
        !matches!(self, CommandResult::Error { .. })
    }
}
