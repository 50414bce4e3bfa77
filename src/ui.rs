// src/ui.rs
//
// Event routing for the editor UI.
//
// Turns user events into editor mutations and reports which page regions
// must be re-rendered. The DOM front end only translates browser events
// into `UiEvent`s and redraws what `Redraw` asks for.

use crate::config::EditorConfig;
use crate::editor::ParamEditor;
use crate::error::Field;
use crate::form::CreateDraft;
use crate::state::ParamId;

/// A user interaction with one of the page regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Typing into a creation form field.
    DraftInput { field: Field, text: String },

    /// The CREATE button.
    Create,

    /// Typing into a parameter's value field.
    ValueInput { id: ParamId, text: String },

    /// A row's Delete button.
    Delete { id: ParamId },

    /// The PRINT MODEL button.
    Print,
}

/// Regions that must be re-rendered after an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Redraw {
    pub form: bool,
    pub list: bool,
    pub table: bool,
}

impl Redraw {
    pub const NONE: Redraw = Redraw {
        form: false,
        list: false,
        table: false,
    };

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

/// Editor state plus the creation form draft.
#[derive(Debug, Clone)]
pub struct EditorUi {
    editor: ParamEditor,
    draft: CreateDraft,
}

impl EditorUi {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            editor: ParamEditor::new(config),
            draft: CreateDraft::new(),
        }
    }

    pub fn editor(&self) -> &ParamEditor {
        &self.editor
    }

    pub fn draft(&self) -> &CreateDraft {
        &self.draft
    }

    /// Apply one event.
    ///
    /// Rejected operations are silent: they change nothing, redraw
    /// nothing, and only leave a debug log line.
    pub fn dispatch(&mut self, event: UiEvent) -> Redraw {
        match event {
            UiEvent::DraftInput { field, text } => {
                self.draft.set(field, text);
                Redraw::NONE
            }
            UiEvent::Create => match self.draft.submit(&mut self.editor) {
                Ok(()) => Redraw {
                    form: true,
                    list: true,
                    ..Redraw::NONE
                },
                Err(e) => {
                    log::debug!("Create ignored: {}", e);
                    Redraw::NONE
                }
            },
            // The input keeps its own draft, so the list is left alone.
            UiEvent::ValueInput { id, text } => {
                if let Err(e) = self.editor.update_value(&id, &text) {
                    log::debug!("Edit ignored: {}", e);
                }
                Redraw::NONE
            }
            UiEvent::Delete { id } => Redraw {
                list: self.editor.delete_parameter(&id),
                ..Redraw::NONE
            },
            UiEvent::Print => {
                self.editor.snapshot();
                Redraw {
                    table: true,
                    ..Redraw::NONE
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::TableView;

    fn ui() -> EditorUi {
        EditorUi::new(&EditorConfig::default())
    }

    fn type_draft(ui: &mut EditorUi, id: &str, name: &str, value: &str) {
        for (field, text) in [(Field::Id, id), (Field::Name, name), (Field::Value, value)] {
            let redraw = ui.dispatch(UiEvent::DraftInput {
                field,
                text: text.to_string(),
            });
            assert!(redraw.is_none());
        }
    }

    #[test]
    fn test_value_edit_redraws_nothing() {
        let mut ui = ui();
        let redraw = ui.dispatch(UiEvent::ValueInput {
            id: "2".into(),
            text: "long".into(),
        });

        assert!(redraw.is_none());
        assert_eq!(ui.editor().value_of(&"2".into()), Some("long"));
    }

    #[test]
    fn test_create_redraws_form_and_list() {
        let mut ui = ui();
        type_draft(&mut ui, "4", "Size", "XL");

        let redraw = ui.dispatch(UiEvent::Create);
        assert_eq!(
            redraw,
            Redraw {
                form: true,
                list: true,
                table: false
            }
        );
        assert_eq!(ui.draft(), &CreateDraft::default());
        assert_eq!(ui.editor().parameters().len(), 4);
    }

    #[test]
    fn test_rejected_create_is_silent() {
        let mut ui = ui();
        type_draft(&mut ui, "1", "Dup", "x");

        assert!(ui.dispatch(UiEvent::Create).is_none());
        assert_eq!(ui.draft().name, "Dup");
        assert_eq!(ui.editor().parameters().len(), 3);
    }

    #[test]
    fn test_delete_redraws_only_list() {
        let mut ui = ui();
        let redraw = ui.dispatch(UiEvent::Delete { id: "1".into() });
        assert_eq!(
            redraw,
            Redraw {
                list: true,
                ..Redraw::NONE
            }
        );

        // Nothing left to remove.
        assert!(ui.dispatch(UiEvent::Delete { id: "1".into() }).is_none());
    }

    #[test]
    fn test_print_redraws_only_table() {
        let mut ui = ui();
        let redraw = ui.dispatch(UiEvent::Print);
        assert_eq!(
            redraw,
            Redraw {
                table: true,
                ..Redraw::NONE
            }
        );

        ui.dispatch(UiEvent::ValueInput {
            id: "3".into(),
            text: "blue".into(),
        });
        let table = TableView::from_last(ui.editor()).unwrap();
        assert_eq!(table.rows[2].value.as_deref(), Some("red"));
    }
}
