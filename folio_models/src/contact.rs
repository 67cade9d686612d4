use std::{collections::BTreeMap, fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::macros::{nutype_string, trim};

/// The raw values of the contact form as entered by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A validated contact form submission.
///
/// Serializes to the payload expected by the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: ContactName,
    pub email: ContactEmail,
    pub subject: ContactSubject,
    pub message: ContactMessageContent,
}

/// What happens with a contact form submission that passed validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactSubmissionMode {
    /// Post the message to the contact endpoint.
    #[default]
    Remote,
    /// Only log the message.
    Local,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// The id of the input element holding this field's value.
    pub fn input_id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    /// The id of the element displaying this field's validation error.
    pub fn error_id(self) -> &'static str {
        match self {
            Self::Name => "nameError",
            Self::Email => "emailError",
            Self::Subject => "subjectError",
            Self::Message => "messageError",
        }
    }

    pub fn from_input_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.input_id() == id)
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.input_id())
    }
}

/// The minimum length of a name in UTF-16 code units, as a browser counts it.
pub const CONTACT_NAME_MIN_LENGTH: usize = 6;

nutype_string!(ContactName(
    predicate = |name| name_error(name).is_none()
));

/// Returns the rule `name` breaks. The length rule takes precedence over the
/// digit rule.
fn name_error(name: &str) -> Option<ContactFieldError> {
    if name.encode_utf16().count() < CONTACT_NAME_MIN_LENGTH {
        Some(ContactFieldError::NameTooShort)
    } else if name.chars().any(|c| c.is_ascii_digit()) {
        Some(ContactFieldError::NameContainsDigits)
    } else {
        None
    }
}

nutype_string!(ContactEmail(regex = CONTACT_EMAIL_REGEX));

/// `^[^\s@]+@[^\s@]+\.[^\s@]+$` with `\s` matching what a browser treats as
/// whitespace.
pub static CONTACT_EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let part = r"(?:[^\s@\x{FEFF}]|\x{85})+";
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).unwrap()
});

nutype_string!(ContactSubject(not_empty));

nutype_string!(ContactMessageContent(not_empty));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactFieldError {
    #[error("Name must be at least 6 characters long.")]
    NameTooShort,
    #[error("Name should not contain numbers.")]
    NameContainsDigits,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Subject cannot be empty.")]
    EmptySubject,
    #[error("Message cannot be empty.")]
    EmptyMessage,
}

/// The validation errors of a contact form, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("The contact form has {} invalid field(s).", .0.len())]
pub struct ContactFormErrors(BTreeMap<ContactField, ContactFieldError>);

impl ContactFormErrors {
    pub fn get(&self, field: ContactField) -> Option<ContactFieldError> {
        self.0.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, ContactFieldError)> + '_ {
        self.0.iter().map(|(&field, &error)| (field, error))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn check<T, E>(
        &mut self,
        field: ContactField,
        result: Result<T, E>,
        map_err: impl FnOnce(E) -> ContactFieldError,
    ) -> Option<T> {
        result
            .map_err(|err| {
                self.0.insert(field, map_err(err));
            })
            .ok()
    }
}

impl FromIterator<(ContactField, ContactFieldError)> for ContactFormErrors {
    fn from_iter<T: IntoIterator<Item = (ContactField, ContactFieldError)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl ContactForm {
    /// Trims and validates all fields.
    ///
    /// Every field is checked, so the error set contains one entry for each
    /// invalid field.
    pub fn validate(&self) -> Result<ContactMessage, ContactFormErrors> {
        let mut errors = ContactFormErrors::default();

        let name = errors.check(
            ContactField::Name,
            ContactName::try_new(self.name.clone()),
            |_: ContactNameError| {
                name_error(trim(&self.name)).unwrap_or(ContactFieldError::NameTooShort)
            },
        );
        let email = errors.check(
            ContactField::Email,
            ContactEmail::try_new(self.email.clone()),
            |_| ContactFieldError::InvalidEmail,
        );
        let subject = errors.check(
            ContactField::Subject,
            ContactSubject::try_new(self.subject.clone()),
            |_| ContactFieldError::EmptySubject,
        );
        let message = errors.check(
            ContactField::Message,
            ContactMessageContent::try_new(self.message.clone()),
            |_| ContactFieldError::EmptyMessage,
        );

        match (name, email, subject, message) {
            (Some(name), Some(email), Some(subject), Some(message)) => Ok(ContactMessage {
                name,
                email,
                subject,
                message,
            }),
            _ => Err(errors),
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }
}
