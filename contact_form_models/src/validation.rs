use std::collections::BTreeMap;

use thiserror::Error;

use crate::field::FieldName;

/// A rule violation of a single field. The `Display` output is the message
/// shown next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{field} is a required field")]
    Required { field: FieldName },
    #[error("{field} must be at least {min} characters")]
    TooShort {
        field: FieldName,
        min: usize,
    },
    #[error("{field} must be a valid email address")]
    InvalidEmail { field: FieldName },
}

impl FieldError {
    pub fn field(&self) -> FieldName {
        match *self {
            Self::Required { field }
            | Self::TooShort { field, .. }
            | Self::InvalidEmail { field } => field,
        }
    }
}

/// At most one error per field, ordered by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FieldName, FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `error` for its field, replacing an earlier error of the same
    /// field.
    pub fn insert(&mut self, error: FieldError) -> Option<FieldError> {
        self.0.insert(error.field(), error)
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn retain(&mut self, mut f: impl FnMut(FieldName) -> bool) {
        self.0.retain(|&field, _| f(field));
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.values()
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<T: IntoIterator<Item = FieldError>>(iter: T) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.insert(error);
        }
        errors
    }
}
