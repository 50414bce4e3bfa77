//! The editor: single owner of live state.
//!
//! [`ParamEditor`] holds the ordered parameter definitions, the working
//! [`Model`], and the last published [`Snapshot`]. Views receive `&ParamEditor`
//! for reading and go through [`ParamEditor::apply`] (or the typed methods it
//! dispatches to) for every mutation.
//!
//! # Usage
//!
//! ```
//! use param_editor::{EditorConfig, ParamEditor};
//!
//! let mut editor = ParamEditor::new(&EditorConfig::new().seed_defaults(false));
//! editor.add_parameter("1", "Purpose", "casual").unwrap();
//! editor.update_value(&"1".into(), "formal").unwrap();
//!
//! let rows = editor.snapshot().rows();
//! assert_eq!(rows[0].value.as_deref(), Some("formal"));
//! ```

use crate::config::EditorConfig;
use crate::error::{EditorError, EditorResult, Field};
use crate::state::{Command, CommandResult, Model, ParamId, ParamValue, Parameter, Snapshot};

/// In-memory parameter editor state.
#[derive(Debug, Clone, Default)]
pub struct ParamEditor {
    parameters: Vec<Parameter>,
    model: Model,
    last_snapshot: Option<Snapshot>,
}

impl ParamEditor {
    pub fn new(config: &EditorConfig) -> Self {
        let (parameters, values) = config.seed();
        Self::with_state(parameters, Model::from_values(values))
    }

    pub fn with_state(parameters: Vec<Parameter>, model: Model) -> Self {
        Self {
            parameters,
            model,
            last_snapshot: None,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Reads
    // ═══════════════════════════════════════════════════════════════════

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn get_parameter(&self, id: &ParamId) -> Option<&Parameter> {
        self.parameters.iter().find(|p| &p.id == id)
    }

    pub fn value_of(&self, id: &ParamId) -> Option<&str> {
        self.model.value_of(id)
    }

    /// The snapshot last requested with [`snapshot`](Self::snapshot).
    pub fn last_snapshot(&self) -> Option<&Snapshot> {
        self.last_snapshot.as_ref()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Mutations
    // ═══════════════════════════════════════════════════════════════════

    /// Create a parameter and its initial value.
    ///
    /// All three fields must be non-empty (the id after normalization) and
    /// the id must not already be in use. On error nothing changes.
    pub fn add_parameter(
        &mut self,
        id: impl Into<ParamId>,
        name: &str,
        value: &str,
    ) -> EditorResult<()> {
        let id = id.into();

        if id.is_empty() {
            return Err(EditorError::EmptyField(Field::Id));
        }
        if name.is_empty() {
            return Err(EditorError::EmptyField(Field::Name));
        }
        if value.is_empty() {
            return Err(EditorError::EmptyField(Field::Value));
        }
        if self.get_parameter(&id).is_some() {
            return Err(EditorError::DuplicateId(id));
        }

        log::debug!("Adding parameter {} ({})", id, name);
        self.parameters.push(Parameter::new(id.clone(), name));
        self.model.push(ParamValue::new(id, value));
        Ok(())
    }

    /// Replace the value of an existing parameter.
    ///
    /// A parameter whose value entry has gone missing is not repaired: the
    /// call fails with [`EditorError::MissingValue`] and the model is left
    /// as is.
    pub fn update_value(&mut self, id: &ParamId, value: &str) -> EditorResult<()> {
        if self.model.set_value(id, value) > 0 {
            return Ok(());
        }

        if self.get_parameter(id).is_some() {
            log::warn!("Parameter {} has no value entry, edit dropped", id);
            Err(EditorError::MissingValue(id.clone()))
        } else {
            Err(EditorError::UnknownParameter(id.clone()))
        }
    }

    /// Remove a parameter and its value entry.
    ///
    /// Returns `false` if nothing carried this id.
    pub fn delete_parameter(&mut self, id: &ParamId) -> bool {
        let before = self.parameters.len();
        self.parameters.retain(|p| &p.id != id);
        let removed_params = before - self.parameters.len();
        let removed_values = self.model.remove(id);

        if removed_params + removed_values > 0 {
            log::debug!("Deleted parameter {}", id);
            true
        } else {
            false
        }
    }

    /// Capture the current parameters and model for display.
    pub fn snapshot(&mut self) -> &Snapshot {
        let snapshot = Snapshot::capture(&self.parameters, &self.model);
        log::debug!("Snapshot taken ({} parameters)", snapshot.parameters().len());
        self.last_snapshot.insert(snapshot)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Commands
    // ═══════════════════════════════════════════════════════════════════

    /// Apply a command from a view.
    pub fn apply(&mut self, cmd: Command) -> CommandResult {
        let result = match cmd {
            Command::AddParameter { id, name, value } => self.add_parameter(id, &name, &value),
            Command::UpdateValue { id, value } => self.update_value(&id, &value),
            Command::DeleteParameter { id } => {
                if self.delete_parameter(&id) {
                    Ok(())
                } else {
                    Err(EditorError::UnknownParameter(id))
                }
            }
            Command::PublishSnapshot => {
                let rows = self.snapshot().parameters().len();
                return CommandResult::SnapshotTaken { rows };
            }
        };

        match result {
            Ok(()) => CommandResult::Ok,
            Err(e) => CommandResult::Error {
                message: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> ParamEditor {
        ParamEditor::with_state(
            vec![Parameter::new("1", "Purpose"), Parameter::new("2", "Length")],
            Model::from_values(vec![
                ParamValue::new("1", "casual"),
                ParamValue::new("2", "short"),
            ]),
        )
    }

    #[test]
    fn test_add_parameter_appends_pair() {
        let mut ed = editor();
        ed.add_parameter("3", "Color", "red").unwrap();

        assert_eq!(ed.parameters().len(), 3);
        assert_eq!(ed.model().len(), 3);
        assert_eq!(ed.parameters()[2], Parameter::new("3", "Color"));
        assert_eq!(ed.model().values()[2], ParamValue::new("3", "red"));
    }

    #[test]
    fn test_add_duplicate_id_is_rejected() {
        let mut ed = editor();
        let before = ed.clone();

        let err = ed.add_parameter(" 2 ", "Other", "x").unwrap_err();
        assert_eq!(err, EditorError::DuplicateId("2".into()));
        assert_eq!(ed.parameters(), before.parameters());
        assert_eq!(ed.model(), before.model());
    }

    #[test]
    fn test_large_numeric_ids_do_not_collide() {
        let mut ed = editor();
        ed.add_parameter(ParamId::from_number(1e19), "Big", "a").unwrap();
        ed.add_parameter(ParamId::from_number(5e19), "Bigger", "b").unwrap();

        assert_eq!(ed.parameters().len(), 4);
        assert_eq!(ed.value_of(&ParamId::from_number(5e19)), Some("b"));
        assert_eq!(
            ed.add_parameter("10000000000000000000", "Again", "c"),
            Err(EditorError::DuplicateId(ParamId::from_number(1e19)))
        );
    }

    #[test]
    fn test_add_empty_field_is_rejected() {
        let mut ed = editor();
        let before = ed.clone();

        assert_eq!(
            ed.add_parameter("", "Name", "v"),
            Err(EditorError::EmptyField(Field::Id))
        );
        assert_eq!(
            ed.add_parameter("4", "", "v"),
            Err(EditorError::EmptyField(Field::Name))
        );
        assert_eq!(
            ed.add_parameter("4", "Name", ""),
            Err(EditorError::EmptyField(Field::Value))
        );
        assert_eq!(ed.parameters(), before.parameters());
        assert_eq!(ed.model(), before.model());
    }

    #[test]
    fn test_update_value_changes_only_target() {
        let mut ed = editor();
        ed.update_value(&"2".into(), "long").unwrap();

        assert_eq!(
            ed.model().values(),
            &[ParamValue::new("1", "casual"), ParamValue::new("2", "long")]
        );
        assert_eq!(ed.parameters(), editor().parameters());
    }

    #[test]
    fn test_update_value_does_not_heal_missing_entry() {
        let mut ed = ParamEditor::with_state(vec![Parameter::new("1", "Purpose")], Model::new());

        assert_eq!(
            ed.update_value(&"1".into(), "x"),
            Err(EditorError::MissingValue("1".into()))
        );
        assert!(ed.model().is_empty());
        assert_eq!(
            ed.update_value(&"9".into(), "x"),
            Err(EditorError::UnknownParameter("9".into()))
        );
    }

    #[test]
    fn test_delete_removes_pair_and_keeps_order() {
        let mut ed = editor();
        ed.add_parameter("3", "Color", "red").unwrap();

        assert!(ed.delete_parameter(&"2".into()));
        let ids: Vec<_> = ed.parameters().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
        let value_ids: Vec<_> = ed.model().values().iter().map(|v| v.param_id.as_str()).collect();
        assert_eq!(value_ids, ["1", "3"]);

        assert!(!ed.delete_parameter(&"2".into()));
    }

    #[test]
    fn test_snapshot_is_detached_from_live_state() {
        let mut ed = editor();
        assert!(ed.last_snapshot().is_none());

        ed.snapshot();
        ed.update_value(&"1".into(), "formal").unwrap();
        ed.delete_parameter(&"2".into());

        let snap = ed.last_snapshot().unwrap();
        assert_eq!(snap.parameters().len(), 2);
        assert_eq!(snap.model().value_of(&"1".into()), Some("casual"));

        let fresh = ed.snapshot();
        assert_eq!(fresh.parameters().len(), 1);
        assert_eq!(fresh.model().value_of(&"1".into()), Some("formal"));
    }

    #[test]
    fn test_worked_example() {
        let mut ed = editor();

        ed.apply(Command::UpdateValue {
            id: "2".into(),
            value: "long".into(),
        });
        assert_eq!(
            ed.model().values(),
            &[ParamValue::new("1", "casual"), ParamValue::new("2", "long")]
        );

        ed.apply(Command::DeleteParameter { id: "1".into() });
        assert_eq!(ed.parameters(), &[Parameter::new("2", "Length")]);
        assert_eq!(ed.model().values(), &[ParamValue::new("2", "long")]);

        assert_eq!(
            ed.apply(Command::PublishSnapshot),
            CommandResult::SnapshotTaken { rows: 1 }
        );
        let rows = ed.last_snapshot().unwrap().rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id.as_str(), "2");
        assert_eq!(rows[0].name, "Length");
        assert_eq!(rows[0].value.as_deref(), Some("long"));
    }

    #[test]
    fn test_apply_reports_rejection() {
        let mut ed = editor();
        let result = ed.apply(Command::AddParameter {
            id: "1".into(),
            name: "Again".into(),
            value: "x".into(),
        });
        assert!(!result.is_ok());
        assert_eq!(
            ed.apply(Command::DeleteParameter { id: "nope".into() }),
            CommandResult::Error {
                message: "Unknown parameter nope".into()
            }
        );
    }

    #[test]
    fn test_seeded_editor() {
        let ed = ParamEditor::new(&EditorConfig::default());
        assert_eq!(ed.parameters().len(), 3);
        assert_eq!(ed.value_of(&"2".into()), Some("short"));
    }
}
