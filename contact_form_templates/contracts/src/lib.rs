use contact_form_models::{field::FieldName, form::ContactFormState};
use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

pub trait Template: Serialize {
    /// Name of the template. The `.html` suffix enables escaping.
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

/// Name and source of the layout every page extends.
pub const BASE_TEMPLATE: (&str, &str) = ("base.html", include_str!("../templates/base.html"));

macro_rules! templates {
    ($( $ident:ident ( $path:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = $path;
                const TEMPLATE: &'static str = include_str!(concat!("../templates/", $path));
            }
        )*

        pub const TEMPLATES: &[(&str, &str)] = &[
            $( ($ident::NAME, $ident::TEMPLATE) ),*
        ];
    };
}

templates! {
    ContactFormTemplate("contact_form.html"),
}

/// The contact form page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactFormTemplate {
    pub title: String,
    pub fields: Vec<FieldView>,
    pub submitted: Option<SubmittedView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub multiline: bool,
    pub value: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmittedView {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: Option<String>,
}

impl ContactFormTemplate {
    pub fn from_state(title: impl Into<String>, state: &ContactFormState) -> Self {
        let fields = FieldName::ALL
            .into_iter()
            .map(|field| FieldView {
                name: field.as_str(),
                label: field.label(),
                input_type: match field {
                    FieldName::Email => "email",
                    _ => "text",
                },
                multiline: field == FieldName::Message,
                value: state.values.get(field).into(),
                error: state.errors.get(field).map(ToString::to_string),
            })
            .collect();

        let submitted = state.submitted.as_ref().map(|submitted| SubmittedView {
            first_name: (*submitted.first_name).clone(),
            last_name: (*submitted.last_name).clone(),
            email: (*submitted.email).clone(),
            message: submitted.message.as_ref().map(|x| (**x).clone()),
        });

        Self {
            title: title.into(),
            fields,
            submitted,
        }
    }

    /// Number of error elements on the page.
    pub fn error_count(&self) -> usize {
        self.fields.iter().filter(|x| x.error.is_some()).count()
    }
}
