use contact_form_models::{
    field::{FieldName, FieldValues},
    validation::{FieldError, ValidationErrors},
};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormValidationService: Send + Sync + 'static {
    /// Check every field of the form.
    ///
    /// Each field contributes at most one error, no matter how many of its
    /// rules it violates. The message field is never validated.
    fn validate(&self, values: &FieldValues) -> ValidationErrors;

    /// Check a single field.
    fn validate_field(&self, field: FieldName, values: &FieldValues) -> Option<FieldError>;
}

#[cfg(feature = "mock")]
impl MockContactFormValidationService {
    pub fn with_validate(mut self, values: FieldValues, result: ValidationErrors) -> Self {
        self.expect_validate()
            .once()
            .with(mockall::predicate::eq(values))
            .return_once(|_| result);
        self
    }
}
