//! Error types shared by the store, the form boundary and persistence.

use crate::form::FormField;
use crate::ids::EventId;
use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("event {0} not found")]
    NotFound(EventId),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("snapshot i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot is not valid event json: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// A rejected form field. Only the first failing field is reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    pub field: FormField,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: FormField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.label(), self.message)
    }
}

impl std::error::Error for ValidationError {}
