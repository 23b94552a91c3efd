use thiserror::Error;

use crate::domain::DraftField;

/// A required form field was empty when a submit was attempted. Recovered
/// locally: the form stays editable and no case is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("trường bắt buộc còn trống: {}", .field.form_label())]
pub struct ValidationError {
    pub field: DraftField,
}

impl ValidationError {
    pub fn missing(field: DraftField) -> Self {
        Self { field }
    }
}
