// src/error.rs
//
// Errors reported by editor operations.
//
// The UI treats all of these as soft failures: the operation is a no-op
// and nothing is shown to the user.

use std::fmt;

use crate::state::ParamId;

/// One of the three creation form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
    Value,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Id => write!(f, "id"),
            Field::Name => write!(f, "name"),
            Field::Value => write!(f, "value"),
        }
    }
}

/// Error from an editor operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// A required creation field was empty.
    EmptyField(Field),

    /// A parameter with this id already exists.
    DuplicateId(ParamId),

    /// The parameter exists but the model has no value entry for it.
    MissingValue(ParamId),

    /// No parameter with this id exists.
    UnknownParameter(ParamId),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorError::EmptyField(field) => write!(f, "Parameter {} must not be empty", field),
            EditorError::DuplicateId(id) => write!(f, "Parameter {} already exists", id),
            EditorError::MissingValue(id) => write!(f, "Model has no value for parameter {}", id),
            EditorError::UnknownParameter(id) => write!(f, "Unknown parameter {}", id),
        }
    }
}

impl std::error::Error for EditorError {}

pub type EditorResult<T> = Result<T, EditorError>;
