use contact_form_core_validation_contracts::MockContactFormValidationService;
use contact_form_models::{
    contact::SubmittedValues,
    field::FieldValues,
    validation::{FieldError, ValidationErrors},
};

use crate::ContactFormServiceImpl;


type Sut = ContactFormServiceImpl<MockContactFormValidationService>;

fn values(first_name: &str, last_name: &str, email: &str, message: &str) -> FieldValues {
    FieldValues {
        first_name: first_name.into(),
        last_name: last_name.into(),
        email: email.into(),
        message: message.into(),
    }
}

fn errors(errors: impl IntoIterator<Item = FieldError>) -> ValidationErrors {
    errors.into_iter().collect()
}

fn submitted(
    first_name: &str,
    last_name: &str,
    email: &str,
    message: Option<&str>,
) -> SubmittedValues {
    SubmittedValues {
        first_name: first_name.to_owned().try_into().unwrap(),
        last_name: last_name.to_owned().try_into().unwrap(),
        email: email.to_owned().try_into().unwrap(),
        message: message.map(|x| x.to_owned().into()),
    }
}
