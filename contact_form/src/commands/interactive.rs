use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use anyhow::Context;
use contact_form_config::Config;
use contact_form_core_form_contracts::ContactFormService;
use contact_form_models::field::{FieldName, UnknownFieldError};
use contact_form_templates_contracts::TemplateService;
use thiserror::Error;
use tracing::warn;

use crate::{environment, page::ContactFormPage};

/// Drive the contact form with events read from stdin.
pub fn interactive(config: &Config, errors_only: bool) -> anyhow::Result<()> {
    let mut page = environment::page(config);
    run(
        &mut page,
        std::io::stdin().lock(),
        std::io::stdout().lock(),
        errors_only,
    )
}

/// One line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// `set <field> <value>`; the value is the rest of the line without its
    /// leading whitespace.
    Set {
        field: FieldName,
        value: String,
    },
    Submit,
    Reset,
    Show,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventParseError {
    #[error("Unknown command `{0}`.")]
    UnknownCommand(String),
    #[error("Missing field name.")]
    MissingField,
    #[error(transparent)]
    UnknownField(#[from] UnknownFieldError),
}

impl FromStr for Event {
    type Err = EventParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (command, rest) = split_word(s.trim_start());
        match command {
            "set" => {
                let (field, value) = split_word(rest.trim_start());
                if field.is_empty() {
                    return Err(EventParseError::MissingField);
                }
                Ok(Self::Set {
                    field: field.parse()?,
                    value: value.trim_start().into(),
                })
            }
            "submit" => Ok(Self::Submit),
            "reset" => Ok(Self::Reset),
            "show" => Ok(Self::Show),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(EventParseError::UnknownCommand(command.into())),
        }
    }
}

fn split_word(s: &str) -> (&str, &str) {
    s.split_once(char::is_whitespace).unwrap_or((s, ""))
}

/// Apply every event from `input` to `page` and write the page to `output`
/// after each one. Blank lines and lines that fail to parse are skipped.
pub fn run<Form, Templates>(
    page: &mut ContactFormPage<Form, Templates>,
    input: impl BufRead,
    mut output: impl Write,
    errors_only: bool,
) -> anyhow::Result<()>
where
    Form: ContactFormService,
    Templates: TemplateService,
{
    for line in input.lines() {
        let line = line.context("Failed to read event")?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let event = match line.parse::<Event>() {
            Ok(event) => event,
            Err(err) => {
                warn!(line, "{err}");
                continue;
            }
        };

        match event {
            Event::Set { field, value } => page.set_field(field, value),
            Event::Submit => {
                page.submit()?;
            }
            Event::Reset => page.reset(),
            Event::Show => {}
            Event::Quit => break,
        }

        if errors_only {
            for error in page.state().errors.iter() {
                writeln!(output, "{error}")?;
            }
            writeln!(output, "--")?;
        } else {
            writeln!(output, "{}", page.render()?)?;
        }
    }

    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[track_caller]
    fn assert_set(input: &str, field: FieldName, value: &str) {
        let expected = Event::Set {
            field,
            value: value.into(),
        };
        assert_eq!(input.parse::<Event>(), Ok(expected));
    }

    #[test]
    fn parse_set() {
        assert_set("set firstName Ann", FieldName::FirstName, "Ann");
        assert_set("set message Hi there", FieldName::Message, "Hi there");
        assert_set("set last-name", FieldName::LastName, "");
    }

    #[test]
    fn parse_set_skips_whitespace_before_value() {
        assert_set("set email  a@b.com", FieldName::Email, "a@b.com");
        assert_set("set\temail\ta@b.com", FieldName::Email, "a@b.com");
        assert_set("set message a  b ", FieldName::Message, "a  b ");
    }

    #[test]
    fn parse_commands() {
        for (input, expected) in [
            ("submit", Event::Submit),
            ("reset", Event::Reset),
            ("show", Event::Show),
            ("exit", Event::Quit),
            ("quit", Event::Quit),
        ] {
            assert_eq!(input.parse::<Event>(), Ok(expected), "{input:?}");
        }
    }

    #[test]
    fn parse_errors() {
        // Arrange
        let unknown_field = UnknownFieldError("subject".into());

        // Act
        let missing = "set".parse::<Event>();
        let subject = "set subject Hi".parse::<Event>();
        let send = "send".parse::<Event>();

        // Assert
        assert_eq!(missing, Err(EventParseError::MissingField));
        assert_eq!(subject, Err(EventParseError::UnknownField(unknown_field)));
        assert_eq!(send, Err(EventParseError::UnknownCommand("send".into())));
    }
}
