use std::sync::LazyLock;

use regex::Regex;

use crate::macros::nutype_string;

/// Values of a successful submission, copied out of the live form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedValues {
    pub first_name: ContactFirstName,
    pub last_name: ContactLastName,
    pub email: ContactEmail,
    /// `None` if the message input was empty when the form was submitted.
    pub message: Option<ContactMessageContent>,
}

nutype_string!(ContactFirstName(validate(
    not_empty,
    len_char_min = ContactFirstName::MIN_LENGTH
)));
impl ContactFirstName {
    pub const MIN_LENGTH: usize = 5;
}

nutype_string!(ContactLastName(validate(not_empty)));

nutype_string!(ContactEmail(validate(
    predicate = |x: &str| is_valid_email(x)
)));

nutype_string!(ContactMessageContent);

/// `local@domain.tld`: no whitespace, a single `@` and at least one dot
/// between non-empty domain labels.
pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").unwrap());

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        for (input, expected) in [
            ("asdfg@asd.com", true),
            ("asdfgh@gmail.com", true),
            ("max.mustermann@example.de", true),
            ("a@b.co.uk", true),
            ("abcdefg@hotmail", false),
            ("abcdefg", false),
            ("@example.com", false),
            ("a@@example.com", false),
            ("a@.com", false),
            ("a@example.", false),
            ("a b@example.com", false),
            (" a@example.com", false),
            ("", false),
        ] {
            assert_eq!(is_valid_email(input), expected, "{input:?}");
        }
    }

    #[test]
    fn first_name_length() {
        assert!(ContactFirstName::try_new("asdf".to_owned()).is_err());
        assert!(ContactFirstName::try_new(String::new()).is_err());
        assert_eq!(
            *ContactFirstName::try_new("DeQuavion".to_owned()).unwrap(),
            "DeQuavion"
        );
    }

    #[test]
    fn email_newtype() {
        assert!(ContactEmail::try_from("a@hotmail".to_owned()).is_err());
        assert_eq!(
            *ContactEmail::try_from("asdfg@asd.com".to_owned()).unwrap(),
            "asdfg@asd.com"
        );
    }
}
