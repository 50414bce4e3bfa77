//! DOM front end built directly on `web-sys`.
//!
//! This module is only compiled when the `web` feature is enabled.
//!
//! The page is split into three regions (creation form, parameter list,
//! snapshot table). Each region gets its listeners once, at mount, and
//! dispatches on `data-*` attributes of the event target. Re-rendering a
//! region replaces its children but never its listeners.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlInputElement};

use crate::config::EditorConfig;
use crate::error::Field;
use crate::state::ParamId;
use crate::ui::{EditorUi, Redraw, UiEvent};
use crate::view::{
    FORM_TITLE, LIST_TITLE, ParamListView, TABLE_CAPTION, TABLE_HEADERS, TableView,
};

const ATTR_ACTION: &str = "data-action";
const ATTR_FIELD: &str = "data-field";
const ATTR_PARAM: &str = "data-param-id";

const ACTION_CREATE: &str = "create";
const ACTION_DELETE: &str = "delete";
const ACTION_PRINT: &str = "print";

/// Live UI state shared by all listeners.
struct App {
    ui: EditorUi,
    placeholder: String,
    document: Document,
    form: Element,
    list: Element,
    table: Element,
}

type SharedApp = Rc<RefCell<App>>;

/// Mount the editor UI into the element named by `config.root_id`.
///
/// Falls back to `<body>` when no such element exists.
pub fn mount(config: EditorConfig) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let root: Element = match document.get_element_by_id(&config.root_id) {
        Some(el) => el,
        None => {
            log::warn!("#{} not found, mounting on <body>", config.root_id);
            document
                .body()
                .ok_or_else(|| JsValue::from_str("no body"))?
                .into()
        }
    };

    let container = create(&document, "div", None)?;
    container.set_class_name("paramEditor");
    let form = create(&document, "div", None)?;
    let list = create(&document, "div", None)?;
    let print = create(&document, "button", Some("PRINT MODEL"))?;
    print.set_class_name("refreshButton");
    print.set_attribute(ATTR_ACTION, ACTION_PRINT)?;
    let table = create(&document, "div", None)?;

    for child in [&form, &list, &print, &table] {
        container.append_child(child)?;
    }
    root.set_inner_html("");
    root.append_child(&container)?;

    let app = Rc::new(RefCell::new(App {
        ui: EditorUi::new(&config),
        placeholder: config.placeholder,
        document,
        form,
        list,
        table,
    }));

    app.borrow().redraw(Redraw {
        form: true,
        list: true,
        table: true,
    })?;

    install_form_listeners(&app)?;
    install_list_listeners(&app)?;
    listen(&print, "click", {
        let app = Rc::clone(&app);
        move |_ev| dispatch(&app, UiEvent::Print)
    })?;

    log::info!("Parameter editor mounted on #{}", config.root_id);
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// Listeners
// ═══════════════════════════════════════════════════════════════════════════

fn install_form_listeners(app: &SharedApp) -> Result<(), JsValue> {
    let form = app.borrow().form.clone();

    listen(&form, "input", {
        let app = Rc::clone(app);
        move |ev| {
            let Some(input) = target_input(&ev) else {
                return;
            };
            let field = match input.get_attribute(ATTR_FIELD).as_deref() {
                Some("id") => Field::Id,
                Some("name") => Field::Name,
                Some("value") => Field::Value,
                _ => return,
            };
            dispatch(
                &app,
                UiEvent::DraftInput {
                    field,
                    text: input.value(),
                },
            );
        }
    })?;

    listen(&form, "click", {
        let app = Rc::clone(app);
        move |ev| {
            if target_attr(&ev, ATTR_ACTION).as_deref() == Some(ACTION_CREATE) {
                dispatch(&app, UiEvent::Create);
            }
        }
    })
}

fn install_list_listeners(app: &SharedApp) -> Result<(), JsValue> {
    let list = app.borrow().list.clone();

    listen(&list, "input", {
        let app = Rc::clone(app);
        move |ev| {
            let Some(input) = target_input(&ev) else {
                return;
            };
            let Some(id) = input.get_attribute(ATTR_PARAM) else {
                return;
            };
            dispatch(
                &app,
                UiEvent::ValueInput {
                    id: ParamId::new(id),
                    text: input.value(),
                },
            );
        }
    })?;

    listen(&list, "click", {
        let app = Rc::clone(app);
        move |ev| {
            if target_attr(&ev, ATTR_ACTION).as_deref() != Some(ACTION_DELETE) {
                return;
            }
            if let Some(id) = target_attr(&ev, ATTR_PARAM) {
                dispatch(&app, UiEvent::Delete { id: ParamId::new(id) });
            }
        }
    })
}

/// Route an event through the editor and redraw what it touched.
fn dispatch(app: &SharedApp, event: UiEvent) {
    let mut app = app.borrow_mut();
    let redraw = app.ui.dispatch(event);
    if !redraw.is_none() {
        report(app.redraw(redraw));
    }
}

fn listen<F>(target: &Element, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    cb.forget();
    Ok(())
}

fn target_input(ev: &Event) -> Option<HtmlInputElement> {
    ev.target().and_then(|t| t.dyn_into().ok())
}

fn target_attr(ev: &Event, name: &str) -> Option<String> {
    ev.target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.get_attribute(name))
}

fn report(result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::error!("Render failed: {:?}", e);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Rendering
// ═══════════════════════════════════════════════════════════════════════════

impl App {
    fn redraw(&self, redraw: Redraw) -> Result<(), JsValue> {
        if redraw.form {
            self.render_form()?;
        }
        if redraw.list {
            self.render_list()?;
        }
        if redraw.table {
            self.render_table()?;
        }
        Ok(())
    }

    fn render_form(&self) -> Result<(), JsValue> {
        let doc = &self.document;
        self.form.set_inner_html("");
        self.form.append_child(&create(doc, "h4", Some(FORM_TITLE))?)?;

        let fields = create(doc, "div", None)?;
        for (field, label, attr) in [
            (Field::Id, "Param ID", "id"),
            (Field::Name, "Param name", "name"),
            (Field::Value, "Param value", "value"),
        ] {
            let input = text_input(doc, self.ui.draft().get(field))?;
            input.set_attribute(ATTR_FIELD, attr)?;
            fields.append_child(&labeled(doc, label, &input)?)?;
        }
        self.form.append_child(&fields)?;

        let button = create(doc, "button", Some("CREATE"))?;
        button.set_class_name("createButton");
        button.set_attribute(ATTR_ACTION, ACTION_CREATE)?;
        self.form.append_child(&button)?;
        Ok(())
    }

    fn render_list(&self) -> Result<(), JsValue> {
        let doc = &self.document;
        self.list.set_inner_html("");
        self.list.append_child(&create(doc, "h4", Some(LIST_TITLE))?)?;

        for row in ParamListView::new(self.ui.editor()).rows {
            let input = text_input(doc, &row.value)?;
            input.set_attribute(ATTR_PARAM, row.id.as_str())?;
            let label = labeled(doc, &row.name, &input)?;

            let delete = create(doc, "button", Some("Delete"))?;
            delete.set_class_name("deleteButton");
            delete.set_attribute(ATTR_ACTION, ACTION_DELETE)?;
            delete.set_attribute(ATTR_PARAM, row.id.as_str())?;
            label.append_child(&delete)?;

            self.list.append_child(&label)?;
        }
        Ok(())
    }

    fn render_table(&self) -> Result<(), JsValue> {
        let doc = &self.document;
        self.table.set_inner_html("");

        let Some(view) = TableView::from_last(self.ui.editor()) else {
            let span = create(doc, "span", Some(&self.placeholder))?;
            span.set_class_name("printTitle");
            self.table.append_child(&span)?;
            return Ok(());
        };

        let table = create(doc, "table", None)?;
        table.set_class_name("table");
        let caption = create(doc, "caption", None)?;
        caption.append_child(&create(doc, "h4", Some(TABLE_CAPTION))?)?;
        table.append_child(&caption)?;

        let thead = create(doc, "thead", None)?;
        let head_row = create(doc, "tr", None)?;
        for header in TABLE_HEADERS {
            head_row.append_child(&create(doc, "th", Some(header))?)?;
        }
        thead.append_child(&head_row)?;
        table.append_child(&thead)?;

        let tbody = create(doc, "tbody", None)?;
        for cells in view.cells() {
            let tr = create(doc, "tr", None)?;
            for cell in &cells {
                tr.append_child(&create(doc, "td", Some(cell))?)?;
            }
            tbody.append_child(&tr)?;
        }
        table.append_child(&tbody)?;

        self.table.append_child(&table)?;
        Ok(())
    }
}

fn create(doc: &Document, tag: &str, text: Option<&str>) -> Result<Element, JsValue> {
    let el = doc.create_element(tag)?;
    if text.is_some() {
        el.set_text_content(text);
    }
    Ok(el)
}

fn text_input(doc: &Document, value: &str) -> Result<HtmlInputElement, JsValue> {
    let input: HtmlInputElement = doc.create_element("input")?.dyn_into()?;
    input.set_type("text");
    input.set_class_name("paramValue");
    input.set_value(value);
    Ok(input)
}

fn labeled(doc: &Document, text: &str, input: &HtmlInputElement) -> Result<Element, JsValue> {
    let label = create(doc, "label", None)?;
    label.set_class_name("label");
    let name = create(doc, "span", Some(text))?;
    name.set_class_name("paramName");
    label.append_child(&name)?;
    label.append_child(input)?;
    Ok(label)
}
