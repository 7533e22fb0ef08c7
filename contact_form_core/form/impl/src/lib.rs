use anyhow::Context;
use contact_form_core_form_contracts::{ContactFormService, ContactFormSubmitError};
use contact_form_core_validation_contracts::ContactFormValidationService;
use contact_form_models::{
    contact::{
        ContactEmail, ContactFirstName, ContactLastName, ContactMessageContent, SubmittedValues,
    },
    field::{FieldName, FieldValues},
    form::ContactFormState,
};
use tracing::{debug, info};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default)]
pub struct ContactFormServiceImpl<Validation> {
    validation: Validation,
    config: ContactFormServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFormServiceConfig {
    /// Clear the inputs after a successful submission.
    pub reset_on_submit: bool,
}

impl Default for ContactFormServiceConfig {
    fn default() -> Self {
        Self {
            reset_on_submit: true,
        }
    }
}

impl<Validation> ContactFormServiceImpl<Validation> {
    pub fn new(validation: Validation, config: ContactFormServiceConfig) -> Self {
        Self { validation, config }
    }
}

impl<Validation> ContactFormServiceImpl<Validation>
where
    Validation: ContactFormValidationService,
{
    fn revalidate(&self, state: &mut ContactFormState) {
        let mut errors = self.validation.validate(&state.values);
        errors.retain(|field| state.touched.contains(&field));
        state.errors = errors;
    }
}

impl<Validation> ContactFormService for ContactFormServiceImpl<Validation>
where
    Validation: ContactFormValidationService,
{
    fn set_field(&self, state: &mut ContactFormState, field: FieldName, value: String) {
        debug!(%field, len = value.chars().count(), "update field");
        state.values.set(field, value);
        state.touched.insert(field);
        self.revalidate(state);
    }

    fn submit(
        &self,
        state: &mut ContactFormState,
    ) -> Result<SubmittedValues, ContactFormSubmitError> {
        state.touched.extend(FieldName::ALL);
        self.revalidate(state);

        if !state.errors.is_empty() {
            debug!(errors = state.errors.len(), "reject submission");
            return Err(ContactFormSubmitError::Invalid(state.errors.clone()));
        }

        let submitted = snapshot(&state.values)?;
        let with_message = submitted.message.is_some();
        info!(with_message, "accept submission");
        state.submitted = Some(submitted.clone());

        if self.config.reset_on_submit {
            state.clear_inputs();
        }

        Ok(submitted)
    }

    fn reset(&self, state: &mut ContactFormState) {
        debug!("reset form");
        state.clear_inputs();
    }
}

fn snapshot(values: &FieldValues) -> anyhow::Result<SubmittedValues> {
    let message = match values.message.trim() {
        "" => None,
        _ => Some(ContactMessageContent::new(values.message.clone())),
    };

    Ok(SubmittedValues {
        first_name: ContactFirstName::try_new(values.first_name.clone())
            .context("Validated first name was rejected")?,
        last_name: ContactLastName::try_new(values.last_name.clone())
            .context("Validated last name was rejected")?,
        email: ContactEmail::try_new(values.email.clone())
            .context("Validated email address was rejected")?,
        message,
    })
}
