use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_NAME_LENGTH: usize = 2;
pub const MIN_MESSAGE_LENGTH: usize = 20;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Form fields in document order. The `name()` values double as the form
/// control names and element ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Category,
    Budget,
    Timeline,
    Message,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Category => "category",
            Field::Budget => "budget",
            Field::Timeline => "timeline",
            Field::Message => "message",
        }
    }
}

/// Values collected from the contact form for one submission attempt.
/// An empty string stands for a field the visitor left blank.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub category: String,
    pub budget: String,
    pub timeline: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Category => &self.category,
            Field::Budget => &self.budget,
            Field::Timeline => &self.timeline,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Category => &mut self.category,
            Field::Budget => &mut self.budget,
            Field::Timeline => &mut self.timeline,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    NameTooShort,
    InvalidEmail,
    MissingCategory,
    MessageTooShort,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::NameTooShort => write!(f, "Please enter your full name"),
            FieldError::InvalidEmail => write!(f, "Please enter a valid email address"),
            FieldError::MissingCategory => write!(f, "Please select what you need help with"),
            FieldError::MessageTooShort => write!(
                f,
                "Please provide more details about your needs (at least {} characters)",
                MIN_MESSAGE_LENGTH
            ),
        }
    }
}

/// Every rule a submission broke, in field order. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.errors().len()
    }

    /// One message per line, ready for the status banner.
    pub fn to_message(&self) -> String {
        self.errors()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate(submission: &ContactSubmission) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if submission.name.trim().chars().count() < MIN_NAME_LENGTH {
        errors.push(FieldError::NameTooShort);
    }
    if !is_valid_email(&submission.email) {
        errors.push(FieldError::InvalidEmail);
    }
    if submission.category.is_empty() {
        errors.push(FieldError::MissingCategory);
    }
    if submission.message.trim().chars().count() < MIN_MESSAGE_LENGTH {
        errors.push(FieldError::MessageTooShort);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

#[cfg(test)]
pub(crate) fn sample_submission() -> ContactSubmission {
    ContactSubmission {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        category: "advice".to_string(),
        budget: String::new(),
        timeline: String::new(),
        message: "Need help picking a laptop".to_string(),
    }
}
