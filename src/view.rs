// src/view.rs
//
// Read-only view models.
//
// Views are built from `&ParamEditor` and never hold on to it. The DOM
// front end and the native binary both render from these.

use crate::editor::ParamEditor;
use crate::state::{ParamId, Snapshot, SnapshotRow};

pub const FORM_TITLE: &str = "CREATE A NEW PARAMETER";
pub const LIST_TITLE: &str = "LIST OF ACTIVE PARAMETERS";
pub const TABLE_CAPTION: &str = "TABLE OF OUR MODEL";
pub const TABLE_HEADERS: [&str; 3] = ["ID", "PARAM", "VALUE"];

/// One row of the editable list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamRow {
    pub id: ParamId,
    pub name: String,
    /// Live value, or empty if the model has none.
    pub value: String,
}

/// The editable list of active parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamListView {
    pub rows: Vec<ParamRow>,
}

impl ParamListView {
    pub fn new(editor: &ParamEditor) -> Self {
        let rows = editor
            .parameters()
            .iter()
            .map(|p| ParamRow {
                id: p.id.clone(),
                name: p.name.clone(),
                value: editor.value_of(&p.id).unwrap_or_default().to_string(),
            })
            .collect();
        Self { rows }
    }
}

/// The snapshot table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub rows: Vec<SnapshotRow>,
}

impl TableView {
    pub fn new(snapshot: &Snapshot) -> Self {
        Self {
            rows: snapshot.rows(),
        }
    }

    /// `None` until a snapshot has been requested.
    pub fn from_last(editor: &ParamEditor) -> Option<Self> {
        editor.last_snapshot().map(Self::new)
    }

    /// Cell text for each row, in header order.
    pub fn cells(&self) -> Vec<[String; 3]> {
        self.rows
            .iter()
            .map(|r| {
                [
                    r.id.to_string(),
                    r.name.clone(),
                    r.value.clone().unwrap_or_default(),
                ]
            })
            .collect()
    }

    /// Render as a column-aligned plain text table.
    pub fn render_text(&self) -> String {
        let cells = self.cells();

        let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
        for row in &cells {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        out.push_str(TABLE_CAPTION);
        out.push('\n');
        push_line(&mut out, &TABLE_HEADERS.map(str::to_string), &widths);
        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        out.push_str(&rule.join("-+-"));
        out.push('\n');
        for row in &cells {
            push_line(&mut out, row, &widths);
        }
        out
    }
}

fn push_line(out: &mut String, cells: &[String; 3], widths: &[usize; 3]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| {
            let pad = w - cell.chars().count();
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::state::{Model, ParamValue, Parameter};

    #[test]
    fn test_list_defaults_missing_value_to_empty() {
        let editor = ParamEditor::with_state(
            vec![Parameter::new("1", "Purpose"), Parameter::new("2", "Length")],
            Model::from_values(vec![ParamValue::new("1", "casual")]),
        );

        let view = ParamListView::new(&editor);
        assert_eq!(view.rows[0].value, "casual");
        assert_eq!(view.rows[1].value, "");
    }

    #[test]
    fn test_table_absent_until_requested() {
        let mut editor = ParamEditor::new(&EditorConfig::default());
        assert!(TableView::from_last(&editor).is_none());

        editor.snapshot();
        let table = TableView::from_last(&editor).unwrap();
        assert_eq!(table.rows.len(), 3);
    }

    #[test]
    fn test_table_ignores_live_edits() {
        let mut editor = ParamEditor::new(&EditorConfig::default());
        editor.snapshot();
        editor.update_value(&"3".into(), "blue").unwrap();

        let table = TableView::from_last(&editor).unwrap();
        assert_eq!(table.cells()[2], ["3", "Color", "red"].map(String::from));
    }

    #[test]
    fn test_render_text() {
        let mut editor = ParamEditor::with_state(
            vec![Parameter::new("2", "Length")],
            Model::from_values(vec![ParamValue::new("2", "long")]),
        );
        editor.snapshot();

        let text = TableView::from_last(&editor).unwrap().render_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], TABLE_CAPTION);
        assert_eq!(lines[1], "ID | PARAM  | VALUE");
        assert_eq!(lines[2], "---+--------+------");
        assert_eq!(lines[3], "2  | Length | long");
        assert!(text.ends_with('\n'));
    }
}
