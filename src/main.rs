// src/main.rs
//
// Native sanity run: drives the editor through a short editing session
// and prints the published table.

use param_editor::{
    Command, CreateDraft, EditorConfig, Field, ParamEditor, ParamListView, TableView,
};

fn main() {
    // --------------------------------
    // Editor
    // --------------------------------

    let config = EditorConfig::new().seed_defaults(false);
    let mut editor = ParamEditor::new(&config);

    // --------------------------------
    // Creation form
    // --------------------------------

    let mut draft = CreateDraft::new();
    for (id, name, value) in [("1", "Purpose", "casual"), ("2", "Length", "short")] {
        draft.set(Field::Id, id);
        draft.set(Field::Name, name);
        draft.set(Field::Value, value);
        if let Err(e) = draft.submit(&mut editor) {
            println!("Create rejected: {}", e);
        }
    }

    // Duplicate id: silently ignored by the UI
    draft.set(Field::Id, "1");
    draft.set(Field::Name, "Again");
    draft.set(Field::Value, "x");
    if let Err(e) = draft.submit(&mut editor) {
        println!("Create rejected: {}", e);
    }

    println!("--- Active parameters ---");
    for row in ParamListView::new(&editor).rows {
        println!("{} = {}", row.name, row.value);
    }

    // --------------------------------
    // Edits
    // --------------------------------

    editor.apply(Command::UpdateValue {
        id: "2".into(),
        value: "long".into(),
    });
    editor.apply(Command::DeleteParameter { id: "1".into() });

    // --------------------------------
    // Publish
    // --------------------------------

    if TableView::from_last(&editor).is_none() {
        println!("{}", config.placeholder);
    }

    editor.apply(Command::PublishSnapshot);

    // Live edit after publishing; the table must not change
    editor.apply(Command::UpdateValue {
        id: "2".into(),
        value: "medium".into(),
    });

    if let Some(table) = TableView::from_last(&editor) {
        print!("{}", table.render_text());
    }
}
