// src/state/snapshot.rs
//
// Point-in-time copies of the editor state, used purely for display.

use super::{Model, ParamId, Parameter};

/// An immutable copy of parameters and model.
///
/// Once taken, a snapshot has no relationship to live state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    parameters: Vec<Parameter>,
    model: Model,
}

/// One displayable line of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRow {
    pub id: ParamId,
    pub name: String,
    /// `None` when the model had no entry for this parameter.
    pub value: Option<String>,
}

impl Snapshot {
    pub fn capture(parameters: &[Parameter], model: &Model) -> Self {
        Self {
            parameters: parameters.to_vec(),
            model: model.clone(),
        }
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// One row per captured parameter, in parameter order.
    pub fn rows(&self) -> Vec<SnapshotRow> {
        self.parameters
            .iter()
            .map(|p| SnapshotRow {
                id: p.id.clone(),
                name: p.name.clone(),
                value: self.model.value_of(&p.id).map(str::to_string),
            })
            .collect()
    }
}
