use contact_form_models::{
    contact::SubmittedValues, field::FieldName, form::ContactFormState,
    validation::ValidationErrors,
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormService: Send + Sync + 'static {
    /// Replace the value of a single field and revalidate the form.
    ///
    /// The field is marked as touched. Errors are recomputed for the whole
    /// form but only kept for touched fields.
    fn set_field(&self, state: &mut ContactFormState, field: FieldName, value: String);

    /// Validate every field and, if none of them is invalid, replace the
    /// submitted snapshot with the current values.
    ///
    /// A rejected submission leaves the previous snapshot untouched and keeps
    /// the errors of all fields in `state` for display.
    fn submit(
        &self,
        state: &mut ContactFormState,
    ) -> Result<SubmittedValues, ContactFormSubmitError>;

    /// Clear all inputs and errors. The submitted snapshot is kept.
    fn reset(&self, state: &mut ContactFormState);
}

#[derive(Debug, Error)]
pub enum ContactFormSubmitError {
    #[error("The form contains {} invalid field(s).", .0.len())]
    Invalid(ValidationErrors),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFormService {
    pub fn with_set_field(mut self, field: FieldName, value: String) -> Self {
        self.expect_set_field()
            .once()
            .withf(move |_, f, v| *f == field && *v == value)
            .return_once(|_, _, _| ());
        self
    }

    pub fn with_submit(mut self, result: Result<SubmittedValues, ContactFormSubmitError>) -> Self {
        self.expect_submit().once().return_once(|_| result);
        self
    }

    pub fn with_reset(mut self) -> Self {
        self.expect_reset().once().return_once(|_| ());
        self
    }
}
