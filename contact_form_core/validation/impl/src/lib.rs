use contact_form_core_validation_contracts::ContactFormValidationService;
use contact_form_models::{
    contact::{is_valid_email, ContactFirstName},
    field::{FieldName, FieldValues},
    validation::{FieldError, ValidationErrors},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ContactFormValidationServiceImpl;

impl ContactFormValidationService for ContactFormValidationServiceImpl {
    fn validate(&self, values: &FieldValues) -> ValidationErrors {
        FieldName::GATING
            .into_iter()
            .filter_map(|field| self.validate_field(field, values))
            .collect()
    }

    fn validate_field(&self, field: FieldName, values: &FieldValues) -> Option<FieldError> {
        let value = values.get(field);
        let trimmed = value.trim();
        if field.is_gating() && trimmed.is_empty() {
            return Some(FieldError::Required { field });
        }

        let min = ContactFirstName::MIN_LENGTH;
        match field {
            FieldName::FirstName if trimmed.chars().count() < min => {
                Some(FieldError::TooShort { field, min })
            }
            FieldName::Email if !is_valid_email(value) => Some(FieldError::InvalidEmail { field }),
            _ => None,
        }
    }
}
