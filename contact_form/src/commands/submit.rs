use std::io::Write;

use anyhow::bail;
use clap::Args;
use contact_form_config::Config;
use contact_form_models::field::FieldName;

use crate::{environment, page::SubmitOutcome};

#[derive(Debug, Default, Args)]
pub struct SubmitCommand {
    /// Value of the first name input
    #[arg(long)]
    pub first_name: Option<String>,
    /// Value of the last name input
    #[arg(long)]
    pub last_name: Option<String>,
    /// Value of the email input
    #[arg(long)]
    pub email: Option<String>,
    /// Value of the message input
    #[arg(long)]
    pub message: Option<String>,
}

impl SubmitCommand {
    /// Fill in the given fields, submit the form and write the resulting
    /// page to `output`. Fails if the submission was rejected.
    pub fn invoke(self, config: &Config, mut output: impl Write) -> anyhow::Result<()> {
        let mut page = environment::page(config);

        for (field, value) in [
            (FieldName::FirstName, self.first_name),
            (FieldName::LastName, self.last_name),
            (FieldName::Email, self.email),
            (FieldName::Message, self.message),
        ] {
            if let Some(value) = value {
                page.set_field(field, value);
            }
        }

        let outcome = page.submit()?;
        writeln!(output, "{}", page.render()?)?;
        output.flush()?;

        if let SubmitOutcome::Rejected { errors } = outcome {
            bail!("Submission rejected: {errors} invalid field(s)");
        }

        Ok(())
    }
}
