use contact_form_core_form_contracts::{ContactFormService, ContactFormSubmitError};
use contact_form_models::{field::FieldName, form::ContactFormState};
use contact_form_templates_contracts::{ContactFormTemplate, TemplateService};

/// A contact form together with the services that validate and render it.
#[derive(Debug)]
pub struct ContactFormPage<Form, Templates> {
    form: Form,
    templates: Templates,
    title: String,
    state: ContactFormState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected { errors: usize },
}

impl<Form, Templates> ContactFormPage<Form, Templates>
where
    Form: ContactFormService,
    Templates: TemplateService,
{
    pub fn new(form: Form, templates: Templates, title: String) -> Self {
        Self {
            form,
            templates,
            title,
            state: ContactFormState::default(),
        }
    }

    pub fn state(&self) -> &ContactFormState {
        &self.state
    }

    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.form.set_field(&mut self.state, field, value.into());
    }

    pub fn submit(&mut self) -> anyhow::Result<SubmitOutcome> {
        match self.form.submit(&mut self.state) {
            Ok(_) => Ok(SubmitOutcome::Accepted),
            Err(ContactFormSubmitError::Invalid(errors)) => Ok(SubmitOutcome::Rejected {
                errors: errors.len(),
            }),
            Err(ContactFormSubmitError::Other(err)) => Err(err),
        }
    }

    pub fn reset(&mut self) {
        self.form.reset(&mut self.state);
    }

    pub fn template(&self) -> ContactFormTemplate {
        ContactFormTemplate::from_state(self.title.as_str(), &self.state)
    }

    pub fn render(&self) -> anyhow::Result<String> {
        self.templates.render(&self.template())
    }
}

#[cfg(test)]
mod tests {
    use contact_form_core_form_contracts::MockContactFormService;
    use contact_form_models::{
        contact::SubmittedValues,
        validation::{FieldError, ValidationErrors},
    };
    use contact_form_templates_contracts::MockTemplateService;
    use contact_form_utils::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;

    type Sut = ContactFormPage<MockContactFormService, MockTemplateService>;

    fn sut(form: MockContactFormService, templates: MockTemplateService) -> Sut {
        ContactFormPage::new(form, templates, "Contact Form".into())
    }

    fn submitted() -> SubmittedValues {
        SubmittedValues {
            first_name: "DeQuavion".to_owned().try_into().unwrap(),
            last_name: "Wilburn".to_owned().try_into().unwrap(),
            email: "asdfg@asd.com".to_owned().try_into().unwrap(),
            message: None,
        }
    }

    #[test]
    fn render() {
        // Arrange
        let state = ContactFormState::default();
        let template = ContactFormTemplate::from_state("Contact Form", &state);
        let templates =
            MockTemplateService::new().with_render(template, "<h1>Contact Form</h1>".into());

        let sut = sut(MockContactFormService::new(), templates);

        // Act
        let result = sut.render();

        // Assert
        assert_eq!(result.unwrap(), "<h1>Contact Form</h1>");
    }

    #[test]
    fn set_field() {
        // Arrange
        let form =
            MockContactFormService::new().with_set_field(FieldName::FirstName, "DeQuavion".into());

        let mut sut = sut(form, MockTemplateService::new());

        // Act
        sut.set_field(FieldName::FirstName, "DeQuavion");
    }

    #[test]
    fn submit_accepted() {
        // Arrange
        let form = MockContactFormService::new().with_submit(Ok(submitted()));

        let mut sut = sut(form, MockTemplateService::new());

        // Act
        let result = sut.submit();

        // Assert
        assert_eq!(result.unwrap(), SubmitOutcome::Accepted);
    }

    #[test]
    fn submit_rejected() {
        // Arrange
        let email_required = FieldError::Required {
            field: FieldName::Email,
        };
        let errors = ValidationErrors::from_iter([email_required]);
        let error = ContactFormSubmitError::Invalid(errors);
        let form = MockContactFormService::new().with_submit(Err(error));

        let mut sut = sut(form, MockTemplateService::new());

        // Act
        let result = sut.submit();

        // Assert
        assert_eq!(result.unwrap(), SubmitOutcome::Rejected { errors: 1 });
    }

    #[test]
    fn submit_failed() {
        // Arrange
        let error = ContactFormSubmitError::Other(anyhow::anyhow!("snapshot failed"));
        let form = MockContactFormService::new().with_submit(Err(error));

        let mut sut = sut(form, MockTemplateService::new());

        // Act
        let result = sut.submit();

        // Assert
        assert_matches!(result, Err(_));
    }

    #[test]
    fn reset() {
        // Arrange
        let form = MockContactFormService::new().with_reset();

        let mut sut = sut(form, MockTemplateService::new());

        // Act
        sut.reset();
    }
}
