// src/config.rs
//
// Editor configuration.

use crate::state::{ParamValue, Parameter};

const DEFAULT_ROOT_ID: &str = "root";
const DEFAULT_PLACEHOLDER: &str = "Print it!";

/// Parameters a fresh editor starts with when seeding is enabled.
const DEFAULT_SEED: [(&str, &str, &str); 3] = [
    ("1", "Purpose", "casual"),
    ("2", "Length", "short"),
    ("3", "Color", "red"),
];

/// Configuration for creating an editor and mounting its UI.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// DOM element id the UI attaches to.
    pub root_id: String,

    /// Start with the default parameter set instead of an empty one.
    pub seed_defaults: bool,

    /// Text shown where the table goes before the first snapshot.
    pub placeholder: String,
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root_id(mut self, id: impl Into<String>) -> Self {
        self.root_id = id.into();
        self
    }

    pub fn seed_defaults(mut self, seed: bool) -> Self {
        self.seed_defaults = seed;
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Initial parameters and values implied by this configuration.
    pub fn seed(&self) -> (Vec<Parameter>, Vec<ParamValue>) {
        if !self.seed_defaults {
            return (Vec::new(), Vec::new());
        }
        DEFAULT_SEED
            .iter()
            .map(|&(id, name, value)| (Parameter::new(id, name), ParamValue::new(id, value)))
            .unzip()
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            root_id: DEFAULT_ROOT_ID.to_string(),
            seed_defaults: true,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}
