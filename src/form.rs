// src/form.rs
//
// Input-side components: the creation form draft and the per-row
// value field.

use crate::editor::ParamEditor;
use crate::error::{EditorResult, Field};

/// Local draft of the creation form.
///
/// The three fields are edited independently. Nothing is validated
/// until [`submit`](Self::submit).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateDraft {
    pub id: String,
    pub name: String,
    pub value: String,
}

impl CreateDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        let text = text.into();
        match field {
            Field::Id => self.id = text,
            Field::Name => self.name = text,
            Field::Value => self.value = text,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Id => &self.id,
            Field::Name => &self.name,
            Field::Value => &self.value,
        }
    }

    /// Try to create the drafted parameter.
    ///
    /// Clears the draft on success. On failure the draft is kept as typed.
    pub fn submit(&mut self, editor: &mut ParamEditor) -> EditorResult<()> {
        editor.add_parameter(self.id.as_str(), &self.name, &self.value)?;
        self.clear();
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A text field that reports every change to its owner.
///
/// Construction seeds the draft and is not a change: the callback only
/// fires from [`input`](Self::input).
pub struct ValueInput<F: FnMut(&str)> {
    draft: String,
    on_change: F,
}

impl<F: FnMut(&str)> ValueInput<F> {
    pub fn new(initial: impl Into<String>, on_change: F) -> Self {
        Self {
            draft: initial.into(),
            on_change,
        }
    }

    pub fn value(&self) -> &str {
        &self.draft
    }

    /// User typed: update the draft and report it.
    pub fn input(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        (self.on_change)(&self.draft);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::error::EditorError;
    use crate::state::ParamId;

    #[test]
    fn test_submit_clears_draft() {
        let mut editor = ParamEditor::new(&EditorConfig::new().seed_defaults(false));
        let mut draft = CreateDraft::new();
        draft.set(Field::Id, "7");
        draft.set(Field::Name, "Size");
        draft.set(Field::Value, "XL");

        draft.submit(&mut editor).unwrap();
        assert_eq!(draft, CreateDraft::default());
        assert_eq!(editor.value_of(&"7".into()), Some("XL"));
    }

    #[test]
    fn test_rejected_submit_keeps_draft() {
        let mut editor = ParamEditor::new(&EditorConfig::default());
        let mut draft = CreateDraft::new();
        draft.set(Field::Id, "1");
        draft.set(Field::Name, "Dup");
        draft.set(Field::Value, "x");

        assert_eq!(
            draft.submit(&mut editor),
            Err(EditorError::DuplicateId("1".into()))
        );
        assert_eq!(draft.get(Field::Name), "Dup");
        assert_eq!(editor.parameters().len(), 3);
    }

    #[test]
    fn test_value_input_fires_only_on_change() {
        let mut seen = Vec::new();
        {
            let mut input = ValueInput::new("short", |v: &str| seen.push(v.to_string()));
            assert_eq!(input.value(), "short");
            input.input("lo");
            input.input("long");
        }
        assert_eq!(seen, ["lo", "long"]);
    }

    #[test]
    fn test_value_input_drives_editor() {
        let mut editor = ParamEditor::new(&EditorConfig::default());
        let id = ParamId::from("2");
        let seed = editor.value_of(&id).unwrap_or_default().to_string();

        let mut input = ValueInput::new(seed, |v: &str| {
            editor.update_value(&id, v).unwrap();
        });
        input.input("long");
        drop(input);

        assert_eq!(editor.value_of(&id), Some("long"));
    }
}
