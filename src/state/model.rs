// src/state/model.rs
//
// The working model: an ordered list of parameter values.
//
// All operations are linear scans. Lists are small and order matters
// for display, so there is no index.

use super::{ParamId, ParamValue};

/// Ordered mapping from parameter id to its current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    values: Vec<ParamValue>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: Vec<ParamValue>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[ParamValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// First entry for `id`, if any.
    pub fn get(&self, id: &ParamId) -> Option<&ParamValue> {
        self.values.iter().find(|v| &v.param_id == id)
    }

    pub fn value_of(&self, id: &ParamId) -> Option<&str> {
        self.get(id).map(|v| v.value.as_str())
    }

    pub fn contains(&self, id: &ParamId) -> bool {
        self.get(id).is_some()
    }

    pub(crate) fn push(&mut self, value: ParamValue) {
        self.values.push(value);
    }

    /// Replace the value of every entry matching `id`.
    ///
    /// Never inserts. Returns the number of entries changed.
    pub(crate) fn set_value(&mut self, id: &ParamId, value: &str) -> usize {
        let mut changed = 0;
        for entry in self.values.iter_mut().filter(|v| &v.param_id == id) {
            entry.value = value.to_string();
            changed += 1;
        }
        changed
    }

    /// Remove every entry matching `id`, keeping the order of the rest.
    pub(crate) fn remove(&mut self, id: &ParamId) -> usize {
        let before = self.values.len();
        self.values.retain(|v| &v.param_id != id);
        before - self.values.len()
    }
}
