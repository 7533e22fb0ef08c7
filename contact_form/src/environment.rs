use contact_form_config::Config;
use contact_form_core_form_impl::{ContactFormServiceConfig, ContactFormServiceImpl};
use contact_form_core_validation_impl::ContactFormValidationServiceImpl;
use contact_form_templates_impl::TemplateServiceImpl;

use crate::page::ContactFormPage;

pub type ContactForm = ContactFormServiceImpl<ContactFormValidationServiceImpl>;

pub type Page = ContactFormPage<ContactForm, TemplateServiceImpl>;

/// Wire up a fresh contact form page from the given config.
pub fn page(config: &Config) -> Page {
    let form = ContactFormServiceImpl::new(
        ContactFormValidationServiceImpl,
        ContactFormServiceConfig {
            reset_on_submit: config.form.reset_on_submit,
        },
    );

    let title = config.form.title.clone();
    ContactFormPage::new(form, TemplateServiceImpl::default(), title)
}
