//! WebAssembly bindings via wasm-bindgen for browser integration.
//!
//! This module is only compiled when the `web` feature is enabled.
//!
//! # Usage
//!
//! Build with wasm-pack:
//! ```bash
//! wasm-pack build --target web --features web
//! ```
//!
//! # JavaScript Example
//!
//! ```javascript
//! import init, { param_editor_init, mount_editor, ParamEditorSession } from './param_editor.js';
//!
//! await init();
//! param_editor_init();
//!
//! // Full UI inside <div id="root">
//! mount_editor("root");
//!
//! // Or drive the state directly
//! const session = new ParamEditorSession();
//! session.add_parameter("4", "Size", "XL");
//! session.update_value("4", "L");
//! const rows = session.snapshot_rows();
//! ```

use wasm_bindgen::prelude::*;

use crate::config::EditorConfig;
use crate::editor::ParamEditor;
use crate::state::ParamId;

// ═══════════════════════════════════════════════════════════════════════════
// Initialization
// ═══════════════════════════════════════════════════════════════════════════

/// Initialize the wasm module. Call this once before using any other functions.
/// Sets up panic hooks and console logging.
#[wasm_bindgen]
pub fn param_editor_init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).ok();
}

/// Mount the editor UI on the element with the given id.
#[wasm_bindgen]
pub fn mount_editor(root_id: &str) -> Result<(), JsValue> {
    crate::web::mount(EditorConfig::new().root_id(root_id))
}

/// Mount the editor UI with explicit options.
#[wasm_bindgen]
pub fn mount_editor_with_options(root_id: &str, options: EditorOptions) -> Result<(), JsValue> {
    crate::web::mount(options.to_config().root_id(root_id))
}

// ═══════════════════════════════════════════════════════════════════════════
// Configuration
// ═══════════════════════════════════════════════════════════════════════════

/// Options for creating an editor.
#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct EditorOptions {
    /// Start with the default parameter set.
    pub seed_defaults: bool,
}

#[wasm_bindgen]
impl EditorOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            seed_defaults: EditorConfig::default().seed_defaults,
        }
    }
}

impl EditorOptions {
    fn to_config(self) -> EditorConfig {
        EditorConfig::new().seed_defaults(self.seed_defaults)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Snapshot rows
// ═══════════════════════════════════════════════════════════════════════════

/// One row of a published snapshot.
#[wasm_bindgen(getter_with_clone)]
#[derive(Clone)]
pub struct SnapshotRowJs {
    pub id: String,
    pub name: String,
    /// Empty when the parameter had no value.
    pub value: String,
}

// ═══════════════════════════════════════════════════════════════════════════
// Session
// ═══════════════════════════════════════════════════════════════════════════

/// JS-side handle owning one editor.
#[wasm_bindgen]
pub struct ParamEditorSession {
    inner: ParamEditor,
}

#[wasm_bindgen]
impl ParamEditorSession {
    /// Create a session with the default parameter set.
    #[wasm_bindgen(constructor)]
    pub fn new() -> ParamEditorSession {
        Self::new_with_options(EditorOptions::default())
    }

    pub fn new_with_options(options: EditorOptions) -> ParamEditorSession {
        ParamEditorSession {
            inner: ParamEditor::new(&options.to_config()),
        }
    }

    /// Create a parameter. Returns false if it was rejected.
    ///
    /// `id` may be a string or a number.
    pub fn add_parameter(&mut self, id: JsValue, name: &str, value: &str) -> bool {
        let id = js_param_id(&id);
        match self.inner.add_parameter(id, name, value) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("Create ignored: {}", e);
                false
            }
        }
    }

    /// Set a parameter's value. Returns false if nothing was updated.
    pub fn update_value(&mut self, id: JsValue, value: &str) -> bool {
        self.inner.update_value(&js_param_id(&id), value).is_ok()
    }

    /// Delete a parameter and its value.
    pub fn delete_parameter(&mut self, id: JsValue) -> bool {
        self.inner.delete_parameter(&js_param_id(&id))
    }

    /// Get a parameter's current value, if any.
    pub fn value_of(&self, id: JsValue) -> Option<String> {
        self.inner.value_of(&js_param_id(&id)).map(str::to_string)
    }

    /// Get the number of parameters.
    pub fn parameter_count(&self) -> u32 {
        self.inner.parameters().len() as u32
    }

    /// Capture a snapshot and return its rows.
    pub fn snapshot_rows(&mut self) -> Vec<SnapshotRowJs> {
        self.inner
            .snapshot()
            .rows()
            .into_iter()
            .map(|r| SnapshotRowJs {
                id: r.id.to_string(),
                name: r.name,
                value: r.value.unwrap_or_default(),
            })
            .collect()
    }
}

impl Default for ParamEditorSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a string-or-number JS id.
fn js_param_id(id: &JsValue) -> ParamId {
    match id.as_f64() {
        Some(n) => ParamId::from_number(n),
        None => ParamId::new(id.as_string().unwrap_or_default()),
    }
}
