use std::collections::BTreeSet;

use crate::{
    contact::SubmittedValues,
    field::{FieldName, FieldValues},
    validation::ValidationErrors,
};

/// Everything the contact form page is rendered from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub values: FieldValues,
    /// Errors of touched fields only.
    pub errors: ValidationErrors,
    /// Fields the user has interacted with since the last reset. A submit
    /// attempt touches every field.
    pub touched: BTreeSet<FieldName>,
    /// Snapshot of the last successful submission.
    pub submitted: Option<SubmittedValues>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Empty,
    Invalid,
    Valid,
}

impl ContactFormState {
    pub fn field_status(&self, field: FieldName) -> FieldStatus {
        if self.errors.contains(field) {
            FieldStatus::Invalid
        } else if self.values.get(field).trim().is_empty() {
            FieldStatus::Empty
        } else {
            FieldStatus::Valid
        }
    }

    /// Clear the inputs. The submitted snapshot is kept.
    pub fn clear_inputs(&mut self) {
        self.values = FieldValues::default();
        self.errors = ValidationErrors::default();
        self.touched.clear();
    }
}
