use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The inputs of the contact form.
///
/// The variant order is the order in which fields are laid out on the page
/// and in which their errors are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Message,
}

impl FieldName {
    pub const ALL: [Self; 4] = [Self::FirstName, Self::LastName, Self::Email, Self::Message];

    /// Fields whose errors block a submission.
    pub const GATING: [Self; 3] = [Self::FirstName, Self::LastName, Self::Email];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    pub fn is_gating(self) -> bool {
        !matches!(self, Self::Message)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown form field `{0}`.")]
pub struct UnknownFieldError(pub String);

impl FromStr for FieldName {
    type Err = UnknownFieldError;

    /// Accepts the camel case name used on the page as well as the kebab and
    /// snake case spellings used on the command line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "firstname" => Ok(Self::FirstName),
            "lastname" => Ok(Self::LastName),
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            _ => Err(UnknownFieldError(s.into())),
        }
    }
}

/// The live text of every input. Every field is always present, possibly
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FieldValues {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Message => &self.message,
        }
    }

    /// Replace the value of `field` and return the previous one.
    pub fn set(&mut self, field: FieldName, value: String) -> String {
        let slot = match field {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Email => &mut self.email,
            FieldName::Message => &mut self.message,
        };
        std::mem::replace(slot, value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_field_name() {
        for (input, expected) in [
            ("firstName", Some(FieldName::FirstName)),
            ("first-name", Some(FieldName::FirstName)),
            ("last_name", Some(FieldName::LastName)),
            ("EMAIL", Some(FieldName::Email)),
            ("message", Some(FieldName::Message)),
            ("subject", None),
            ("", None),
        ] {
            assert_eq!(input.parse::<FieldName>().ok(), expected);
        }
    }

    #[test]
    fn field_name_wire_format() {
        assert_eq!(
            serde_json::to_value(FieldName::FirstName).unwrap(),
            serde_json::json!("firstName")
        );
        assert_eq!(FieldName::LastName.to_string(), "lastName");
    }

    #[test]
    fn set_replaces_only_one_field() {
        // Arrange
        let mut values = FieldValues {
            first_name: "DeQuavion".into(),
            email: "asdfg@asd.com".into(),
            ..Default::default()
        };

        // Act
        let previous = values.set(FieldName::Email, "new@example.com".into());

        // Assert
        assert_eq!(previous, "asdfg@asd.com");
        assert_eq!(
            values,
            FieldValues {
                first_name: "DeQuavion".into(),
                last_name: "".into(),
                email: "new@example.com".into(),
                message: "".into(),
            }
        );
    }

    #[test]
    fn gating_fields() {
        assert!(FieldName::GATING.iter().all(|field| field.is_gating()));
        assert!(!FieldName::Message.is_gating());
    }
}
